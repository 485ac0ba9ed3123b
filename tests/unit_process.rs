use asedoc::ase::{
	AseError, Cel, Fixed, Layer, Point, ProcessOptions, PropValue, PropertyMap, PropertyType, RawProperty, RawPropertyMap, RawValue,
	Rect, Size, Slice, Sprite, Tag, UserData, Uuid, process_cel, process_layer, process_slice, process_sprite, process_tag,
	process_user_data,
};

const LAYER_EXTENSION_ID: u32 = 1;
const CEL_EXTENSION_ID: u32 = 2;
const TAG_EXTENSION_ID: u32 = 3;
const SLICE_EXTENSION_ID: u32 = 4;
const SPRITE_EXTENSION_ID: u32 = 5;
const USER_DATA_EXTENSION_ID: u32 = 6;

const FIXTURE_UUID: Uuid = Uuid([
	0xde, 0xad, 0xbe, 0xef, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb,
]);

fn full_type_map(id: u32, origin: &str) -> RawPropertyMap {
	RawPropertyMap {
		id,
		entries: vec![
			RawProperty::new("id", RawValue::String(origin.to_owned())),
			RawProperty::new("sbyte", RawValue::I8(i8::MAX)),
			RawProperty::new("byte", RawValue::U8(u8::MAX)),
			RawProperty::new("short", RawValue::I16(i16::MAX)),
			RawProperty::new("ushort", RawValue::U16(u16::MAX)),
			RawProperty::new("int", RawValue::I32(i32::MAX)),
			RawProperty::new("uint", RawValue::U32(u32::MAX)),
			RawProperty::new("long", RawValue::I64(i64::MAX)),
			RawProperty::new("ulong", RawValue::U64(u64::MAX)),
			RawProperty::new("string", RawValue::String("hello".to_owned())),
			RawProperty::new("fixed", RawValue::Fixed(Fixed::from_bits(i32::MAX))),
			RawProperty::new("float", RawValue::F32(f32::MAX)),
			RawProperty::new("double", RawValue::F64(f64::MAX)),
			RawProperty::new("point", RawValue::Point(Point { x: i32::MIN, y: i32::MAX })),
			RawProperty::new("size", RawValue::Size(Size { w: i32::MIN, h: i32::MAX })),
			RawProperty::new(
				"rect",
				RawValue::Rect(Rect {
					x: i32::MIN,
					y: i32::MAX,
					w: i32::MAX,
					h: i32::MIN,
				}),
			),
			RawProperty::new(
				"vector",
				RawValue::Vector(vec![RawValue::String("greetings".to_owned()), RawValue::I32(i32::MAX)]),
			),
			RawProperty::new(
				"props",
				RawValue::Map(RawPropertyMap {
					id: 0,
					entries: vec![
						RawProperty::new("howdy", RawValue::String("hiya".to_owned())),
						RawProperty::new("bye", RawValue::I32(i32::MAX)),
					],
				}),
			),
			RawProperty::new("uuid", RawValue::Uuid(FIXTURE_UUID)),
			RawProperty::new("bool", RawValue::Bool(true)),
			RawProperty::new("absent", RawValue::Null),
		],
	}
}

fn fixture_user_data(extension_id: u32, origin: &str) -> UserData {
	UserData {
		text: Some(format!("{origin} annotation")),
		color: Some([0x10, 0x20, 0x30, 0xff]),
		property_maps: vec![full_type_map(0, origin), full_type_map(extension_id, origin)],
	}
}

fn assert_full_map(map: &PropertyMap, id: u32, origin: &str) {
	assert_eq!(map.id, id);
	// The Null entry is dropped, everything else survives.
	assert_eq!(map.len(), 20);
	assert!(map.get("absent").is_none());

	assert_eq!(map.get("id").map(|n| &n.value), Some(&PropValue::String(origin.to_owned())));
	assert_eq!(map.get("sbyte").map(|n| &n.value), Some(&PropValue::I32(127)));
	assert_eq!(map.get("byte").map(|n| &n.value), Some(&PropValue::I32(255)));
	assert_eq!(map.get("short").map(|n| &n.value), Some(&PropValue::I32(32767)));
	assert_eq!(map.get("ushort").map(|n| &n.value), Some(&PropValue::I32(65535)));
	assert_eq!(map.get("int").map(|n| &n.value), Some(&PropValue::I32(i32::MAX)));
	assert_eq!(map.get("uint").map(|n| &n.value), Some(&PropValue::I64(4_294_967_295)));
	assert_eq!(map.get("long").map(|n| &n.value), Some(&PropValue::I64(i64::MAX)));
	assert_eq!(map.get("ulong").map(|n| &n.value), Some(&PropValue::U64(u64::MAX)));
	assert_eq!(map.get("string").map(|n| &n.value), Some(&PropValue::String("hello".to_owned())));
	assert_eq!(
		map.get("fixed").map(|n| &n.value),
		Some(&PropValue::Fixed(Fixed::from_bits(i32::MAX)))
	);
	assert_eq!(map.get("float").map(|n| &n.value), Some(&PropValue::F32(f32::MAX)));
	assert_eq!(map.get("double").map(|n| &n.value), Some(&PropValue::F64(f64::MAX)));
	assert_eq!(
		map.get("point").map(|n| &n.value),
		Some(&PropValue::Point(Point { x: i32::MIN, y: i32::MAX }))
	);
	assert_eq!(
		map.get("size").map(|n| &n.value),
		Some(&PropValue::Size(Size { w: i32::MIN, h: i32::MAX }))
	);
	assert_eq!(map.get("uuid").map(|n| &n.value), Some(&PropValue::Uuid(FIXTURE_UUID)));
	assert_eq!(map.get("bool").map(|n| &n.value), Some(&PropValue::Bool(true)));

	let vector = map.get("vector").expect("vector entry");
	assert_eq!(vector.kind, PropertyType::Vector);
	assert_eq!(vector.children().len(), 2);
	assert!(vector.children().iter().all(|child| child.key.is_empty()));

	let props = map.get("props").expect("props entry");
	assert_eq!(props.kind, PropertyType::Map);
	assert_eq!(props.get("howdy").map(|n| &n.value), Some(&PropValue::String("hiya".to_owned())));
	assert_eq!(props.get("bye").map(|n| &n.value), Some(&PropValue::I32(i32::MAX)));

	// Leaf tags survive normalization so width changes stay traceable.
	assert_eq!(map.get("sbyte").map(|n| n.kind), Some(PropertyType::I8));
	assert_eq!(map.get("uint").map(|n| n.kind), Some(PropertyType::U32));
}

#[test]
fn every_element_entry_point_selects_its_extension_map() {
	let opts = ProcessOptions::default();

	let sprite = Sprite {
		name: "fixture".to_owned(),
		user_data: Some(fixture_user_data(SPRITE_EXTENSION_ID, "sprite")),
	};
	assert_full_map(
		&process_sprite(&sprite, SPRITE_EXTENSION_ID, &opts).expect("sprite processes"),
		SPRITE_EXTENSION_ID,
		"sprite",
	);

	let layer = Layer {
		name: "fixture-layer".to_owned(),
		user_data: Some(fixture_user_data(LAYER_EXTENSION_ID, "layer")),
	};
	assert_full_map(
		&process_layer(&layer, LAYER_EXTENSION_ID, &opts).expect("layer processes"),
		LAYER_EXTENSION_ID,
		"layer",
	);

	let cel = Cel {
		frame: 0,
		layer: 0,
		user_data: Some(fixture_user_data(CEL_EXTENSION_ID, "cel")),
	};
	assert_full_map(&process_cel(&cel, CEL_EXTENSION_ID, &opts).expect("cel processes"), CEL_EXTENSION_ID, "cel");

	let tag = Tag {
		name: "fixture-tag".to_owned(),
		user_data: Some(fixture_user_data(TAG_EXTENSION_ID, "tag")),
	};
	assert_full_map(&process_tag(&tag, TAG_EXTENSION_ID, &opts).expect("tag processes"), TAG_EXTENSION_ID, "tag");

	let slice = Slice {
		name: "fixture-slice".to_owned(),
		user_data: Some(fixture_user_data(SLICE_EXTENSION_ID, "slice")),
	};
	assert_full_map(
		&process_slice(&slice, SLICE_EXTENSION_ID, &opts).expect("slice processes"),
		SLICE_EXTENSION_ID,
		"slice",
	);

	let user_data = fixture_user_data(USER_DATA_EXTENSION_ID, "userdata");
	assert_full_map(
		&process_user_data(&user_data, USER_DATA_EXTENSION_ID, &opts).expect("user data processes"),
		USER_DATA_EXTENSION_ID,
		"userdata",
	);
	assert_full_map(&process_user_data(&user_data, 0, &opts).expect("user data processes"), 0, "userdata");
}

#[test]
fn unmatched_extension_id_yields_an_empty_map_with_that_id() {
	let user_data = fixture_user_data(USER_DATA_EXTENSION_ID, "userdata");

	let miss = process_user_data(&user_data, 99, &ProcessOptions::default()).expect("processes");
	assert_eq!(miss.id, 99);
	assert!(miss.is_empty());
	assert!(miss.at(0).is_err());
}

#[test]
fn elements_without_user_data_are_rejected() {
	let opts = ProcessOptions::default();

	let sprite = Sprite {
		name: "bare".to_owned(),
		user_data: None,
	};
	let err = process_sprite(&sprite, 0, &opts).expect_err("missing user data");
	assert!(matches!(err, AseError::MissingUserData { element: "sprite" }));

	let tag = Tag {
		name: "bare-tag".to_owned(),
		user_data: None,
	};
	let err = process_tag(&tag, 0, &opts).expect_err("missing user data");
	assert!(matches!(err, AseError::MissingUserData { element: "tag" }));
}

#[test]
fn processed_trees_render_to_json_for_inspection() {
	let user_data = fixture_user_data(USER_DATA_EXTENSION_ID, "userdata");
	let map = process_user_data(&user_data, USER_DATA_EXTENSION_ID, &ProcessOptions::default()).expect("processes");

	let rendered = serde_json::to_string(&map).expect("serializes");
	assert!(rendered.contains("\"howdy\""));
	assert!(rendered.contains("\"hiya\""));
	assert!(rendered.contains("4294967295"));
}
