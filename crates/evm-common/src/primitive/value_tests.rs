use super::*;
use crate::loading::{Descriptor, LoadSave};
use crate::Error;

#[test]
fn make_and_get() {
    let f32_value = PrimitiveValue::make(10.0f32);
    let i8_value = PrimitiveValue::from(-50i8);

    assert_eq!(f32_value.get::<f32>(), Some(10.0));
    assert_eq!(i8_value.get::<i8>(), Some(-50));
}

#[test]
fn get_wrong_kind_is_none() {
    let value = PrimitiveValue::make(7u32);

    assert_eq!(value.get::<u32>(), Some(7));
    assert_eq!(value.get::<i32>(), None);
    assert_eq!(value.get::<u64>(), None);
    assert_eq!(value.get::<f32>(), None);
}

#[test]
fn kind_of_made_value() {
    assert_eq!(PrimitiveValue::make(1i16).kind(), PrimitiveKind::I16);
    assert_eq!(PrimitiveValue::make(1u64).kind(), PrimitiveKind::U64);
    assert_eq!(PrimitiveValue::make(1.0f64).kind(), PrimitiveKind::F64);
    assert!(PrimitiveValue::make(1u8).is(PrimitiveKind::U8));
}

#[test]
fn thin_load_save() {
    let val = PrimitiveValue::make(1.1e12f32);
    let val2 = PrimitiveValue::make(9.6e-53f64);

    let mut buffer = [0u8; 16];

    let val_offset = 0;
    let val2_offset = 4;

    assert_eq!(val.encode(&mut buffer[val_offset..], Layout::Thin), Ok(4));
    assert_eq!(val2.encode(&mut buffer[val2_offset..], Layout::Thin), Ok(8));

    let val_loaded = PrimitiveValue::decode_thin(PrimitiveKind::F32, &buffer[val_offset..]).unwrap();
    let val2_loaded =
        PrimitiveValue::decode_thin(PrimitiveKind::F64, &buffer[val2_offset..]).unwrap();

    assert_eq!(val_loaded, val);
    assert_eq!(val2_loaded, val2);
    assert_eq!(val_loaded.get::<f32>(), Some(1.1e12f32));
    assert_eq!(val2_loaded.get::<f64>(), Some(9.6e-53));
}

#[test]
fn fat_load_save() {
    let vals = [
        PrimitiveValue::make(10.0f64),
        PrimitiveValue::make(54i8),
        PrimitiveValue::make(45000u16),
    ];

    let total: usize = vals.iter().map(|v| v.save_size(Layout::Fat)).sum();
    assert_eq!(total, 9 + 2 + 3);
    let mut buffer = vec![0u8; total];

    let mut offset = 0;
    for val in &vals {
        offset += val.encode(&mut buffer[offset..], Layout::Fat).unwrap();
    }
    assert_eq!(offset, total);

    offset = 0;
    for expected in &vals {
        let data = &buffer[offset..];
        offset += PrimitiveValue::load_size_fat(data).unwrap();

        let primitive = PrimitiveValue::decode_fat(data).unwrap();

        assert_eq!(primitive.kind(), expected.kind());
        assert_eq!(primitive, *expected);
    }
    assert_eq!(offset, total);
}

#[test]
fn u16_thin_is_little_endian() {
    let value = PrimitiveValue::decode_thin(PrimitiveKind::U16, &[0x00, 0x01]).unwrap();
    assert_eq!(value.get::<u16>(), Some(256));
}

#[test]
fn fat_layout_bytes() {
    let value = PrimitiveValue::make(-2i32);

    assert_eq!(value.encode_to_vec(Layout::Fat), [2, 0xfe, 0xff, 0xff, 0xff]);
    assert_eq!(value.encode_to_vec(Layout::Thin), [0xfe, 0xff, 0xff, 0xff]);
}

#[test]
fn encode_and_encode_into_agree() {
    let value = PrimitiveValue::make(0x0102_0304_0506_0708u64);

    for layout in [Layout::Thin, Layout::Fat] {
        let mut buffer = [0u8; 9];
        let written = value.encode(&mut buffer, layout).unwrap();
        assert_eq!(&buffer[..written], value.encode_to_vec(layout).as_slice());
    }
}

#[test]
fn encode_into_appends() {
    let mut out = vec![0xaa];
    PrimitiveValue::make(3u8).encode_into(&mut out, Layout::Fat);
    PrimitiveValue::make(4u8).encode_into(&mut out, Layout::Thin);

    assert_eq!(out, [0xaa, 4, 3, 4]);
}

#[test]
fn sizes() {
    let value = PrimitiveValue::make(1i64);

    assert_eq!(value.save_size(Layout::Thin), 8);
    assert_eq!(value.save_size(Layout::Fat), 9);
    assert_eq!(PrimitiveValue::load_size_thin(PrimitiveKind::I16), 2);
    assert_eq!(PrimitiveValue::load_size_fat(&[PrimitiveKind::F32.to_u8()]), Ok(5));
}

#[test]
fn decode_fat_invalid_tag() {
    let buffer = [10u8, 0, 0, 0, 0, 0, 0, 0, 0];

    assert_eq!(PrimitiveValue::decode_fat(&buffer), Err(Error::InvalidType(10)));
    assert_eq!(PrimitiveValue::load_size_fat(&buffer), Err(Error::InvalidType(10)));
    assert_eq!(PrimitiveValue::decode_fat(&[0xff]), Err(Error::InvalidType(0xff)));
}

#[test]
fn decode_empty_buffer() {
    assert_eq!(
        PrimitiveValue::decode_fat(&[]),
        Err(Error::Truncated {
            needed: 1,
            actual: 0
        })
    );
}

#[test]
fn decode_truncated_payload() {
    assert_eq!(
        PrimitiveValue::decode_thin(PrimitiveKind::F64, &[0; 5]),
        Err(Error::Truncated {
            needed: 8,
            actual: 5
        })
    );
    assert_eq!(
        PrimitiveValue::decode_fat(&[PrimitiveKind::U32.to_u8(), 1, 2]),
        Err(Error::Truncated {
            needed: 4,
            actual: 2
        })
    );
}

#[test]
fn encode_truncated_writes_nothing() {
    let mut buffer = [0u8; 4];
    let err = PrimitiveValue::make(1.0f32)
        .encode(&mut buffer, Layout::Fat)
        .unwrap_err();

    assert_eq!(
        err,
        Error::Truncated {
            needed: 5,
            actual: 4
        }
    );
    assert_eq!(buffer, [0u8; 4]);
}

#[test]
fn decode_by_layout() {
    let fat = [PrimitiveKind::I8.to_u8(), 0x80];

    // The kind argument is ignored for fat buffers.
    let value = PrimitiveValue::decode(&fat, Layout::Fat, PrimitiveKind::F64).unwrap();
    assert_eq!(value.get::<i8>(), Some(i8::MIN));

    let value = PrimitiveValue::decode(&fat[1..], Layout::Thin, PrimitiveKind::U8).unwrap();
    assert_eq!(value.get::<u8>(), Some(0x80));
}

#[test]
fn layout_flags() {
    assert_eq!(Layout::from_fat(true), Layout::Fat);
    assert_eq!(Layout::from_fat(false), Layout::Thin);
    assert!(Layout::Fat.is_fat());
    assert_eq!(Layout::default(), Layout::Thin);
    assert_eq!(Layout::Thin.tag_size(), 0);
    assert_eq!(Layout::Fat.tag_size(), 1);
}

#[test]
fn value_descriptor_is_fat() {
    let descriptor = Descriptor::<PrimitiveValue>::of();
    let value = PrimitiveValue::make(45000u16);

    let bytes = descriptor.to_vec(&value).unwrap();
    assert_eq!(bytes, [5, 0xc8, 0xaf]);
    assert_eq!(descriptor.load_size(&bytes), Ok(3));
    assert_eq!(descriptor.load(&bytes), Ok(value));
    assert_eq!(LoadSave::save_size(&value), 3);
}

#[test]
fn display() {
    let rendered: Vec<String> = [
        PrimitiveValue::make(54i8),
        PrimitiveValue::make(45000u16),
        PrimitiveValue::make(10.0f64),
        PrimitiveValue::make(-1.5f32),
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    54i8
    45000u16
    10f64
    -1.5f32
    ");
}

#[test]
fn display_alternate_is_bare_scalar() {
    assert_eq!(format!("{:#}", PrimitiveValue::make(54i8)), "54");
    assert_eq!(format!("{:#}", PrimitiveValue::make(0.25f64)), "0.25");
    assert_eq!(format!("{:<4}|", PrimitiveKind::U8), "u8  |");
}
