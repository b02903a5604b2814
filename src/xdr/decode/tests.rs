mod decoded_shapes {

	use crate::xdr::decode::{DecodeOptions, decode_value};
	use crate::xdr::value::Value;
	use xdrview_testkit::{SAMPLE_ACCOUNT_KEY, XdrWriter, payment_envelope};

	fn decode(bytes: &[u8], type_name: &str) -> Value {
		decode_value(bytes, type_name, &DecodeOptions::default()).expect("decode succeeds")
	}

	#[test]
	fn scalars_decode_big_endian() {
		let mut w = XdrWriter::new();
		w.i32(-7);
		assert_eq!(decode(&w.into_bytes(), "Int32"), Value::Int(-7));

		let mut w = XdrWriter::new();
		w.u64(u64::MAX);
		assert_eq!(decode(&w.into_bytes(), "Uint64"), Value::Uhyper(u64::MAX));

		let mut w = XdrWriter::new();
		w.u32(1);
		assert_eq!(decode(&w.into_bytes(), "Bool"), Value::Bool(true));
	}

	#[test]
	fn strings_and_opaques_skip_padding() {
		let mut w = XdrWriter::new();
		w.string("hello");
		assert_eq!(decode(&w.into_bytes(), "String32"), Value::String("hello".into()));

		let mut w = XdrWriter::new();
		w.opaque_var(&[0xAB, 0xCD, 0xEF]);
		assert_eq!(decode(&w.into_bytes(), "ScBytes"), Value::Bytes(vec![0xAB, 0xCD, 0xEF]));

		let mut w = XdrWriter::new();
		w.opaque_fixed(&SAMPLE_ACCOUNT_KEY);
		assert_eq!(decode(&w.into_bytes(), "Hash"), Value::Bytes(SAMPLE_ACCOUNT_KEY.to_vec()));
	}

	#[test]
	fn struct_fields_keep_declaration_order() {
		let mut w = XdrWriter::new();
		w.i32(3);
		w.i32(2);
		let Value::Struct(price) = decode(&w.into_bytes(), "Price") else {
			panic!("expected struct");
		};
		assert_eq!(price.type_name.as_ref(), "Price");
		assert_eq!(price.fields[0].name.as_ref(), "n");
		assert_eq!(price.fields[0].value, Value::Int(3));
		assert_eq!(price.fields[1].name.as_ref(), "d");
		assert_eq!(price.fields[1].value, Value::Int(2));
	}

	#[test]
	fn enums_carry_member_names() {
		let mut w = XdrWriter::new();
		w.i32(1);
		let Value::Enum(member) = decode(&w.into_bytes(), "MemoType") else {
			panic!("expected enum");
		};
		assert_eq!(member.name.as_ref(), "memoText");
		assert_eq!(member.value, 1);
	}

	#[test]
	fn optional_fields_decode_marker_first() {
		let mut w = XdrWriter::new();
		w.string("config");
		w.present(false);
		let Value::Struct(op) = decode(&w.into_bytes(), "ManageDataOp") else {
			panic!("expected struct");
		};
		assert_eq!(op.fields[1].name.as_ref(), "dataValue");
		assert_eq!(op.fields[1].value, Value::Void);

		let mut w = XdrWriter::new();
		w.string("config");
		w.present(true);
		w.opaque_var(b"payload");
		let Value::Struct(op) = decode(&w.into_bytes(), "ManageDataOp") else {
			panic!("expected struct");
		};
		assert_eq!(op.fields[1].value, Value::Bytes(b"payload".to_vec()));
	}

	#[test]
	fn union_arm_carries_accessor_name() {
		let mut w = XdrWriter::new();
		w.i32(1);
		w.string("hi");
		let Value::Union(memo) = decode(&w.into_bytes(), "Memo") else {
			panic!("expected union");
		};
		assert_eq!(memo.variant.as_ref(), "memoText");
		assert_eq!(memo.discriminant, 1);
		let arm = memo.arm.as_ref().expect("text arm present");
		assert_eq!(arm.name.as_ref(), "text");
		assert_eq!(arm.value, Value::String("hi".into()));
	}

	#[test]
	fn void_union_arm_has_no_payload() {
		let mut w = XdrWriter::new();
		w.i32(0);
		let Value::Union(memo) = decode(&w.into_bytes(), "Memo") else {
			panic!("expected union");
		};
		assert_eq!(memo.variant.as_ref(), "memoNone");
		assert!(memo.arm.is_none());
	}

	#[test]
	fn int_switched_unions_use_decimal_variants() {
		let mut w = XdrWriter::new();
		w.i32(0);
		let Value::Union(ext) = decode(&w.into_bytes(), "ExtensionPoint") else {
			panic!("expected union");
		};
		assert_eq!(ext.variant.as_ref(), "0");
		assert!(ext.arm.is_none());
	}

	#[test]
	fn default_arms_cover_failure_codes() {
		let mut w = XdrWriter::new();
		w.i64(100);
		w.i32(-5);
		w.i32(0);
		let Value::Struct(result) = decode(&w.into_bytes(), "TransactionResult") else {
			panic!("expected struct");
		};
		let Value::Union(inner) = &result.fields[1].value else {
			panic!("expected result union");
		};
		assert_eq!(inner.variant.as_ref(), "txBadSeq");
		assert!(inner.arm.is_none());
	}

	#[test]
	fn muxed_account_uses_wide_discriminant() {
		let mut w = XdrWriter::new();
		w.i32(256);
		w.u64(7);
		w.opaque_fixed(&SAMPLE_ACCOUNT_KEY);
		let Value::Union(muxed) = decode(&w.into_bytes(), "MuxedAccount") else {
			panic!("expected union");
		};
		assert_eq!(muxed.variant.as_ref(), "keyTypeMuxedEd25519");
		let arm = muxed.arm.as_ref().expect("med25519 arm present");
		assert_eq!(arm.name.as_ref(), "med25519");
		let Value::Struct(med) = &arm.value else {
			panic!("expected med25519 struct");
		};
		assert_eq!(med.fields[0].name.as_ref(), "id");
		assert_eq!(med.fields[0].value, Value::Uhyper(7));
	}

	#[test]
	fn canonical_envelope_decodes_end_to_end() {
		let Value::Union(envelope) = decode(&payment_envelope(), "TransactionEnvelope") else {
			panic!("expected union");
		};
		assert_eq!(envelope.variant.as_ref(), "envelopeTypeTx");
		let arm = envelope.arm.as_ref().expect("v1 arm present");
		let Value::Struct(v1) = &arm.value else {
			panic!("expected v1 envelope struct");
		};
		assert_eq!(v1.fields[0].name.as_ref(), "tx");
		assert_eq!(v1.fields[1].name.as_ref(), "signatures");
	}
}

mod input_guards {

	use crate::xdr::decode::{DecodeOptions, decode_value};
	use crate::xdr::error::XdrError;
	use xdrview_testkit::XdrWriter;

	fn decode_err(bytes: &[u8], type_name: &str) -> XdrError {
		decode_value(bytes, type_name, &DecodeOptions::default()).expect_err("decode must fail")
	}

	#[test]
	fn unknown_type_is_rejected() {
		match decode_err(&[], "NotARealType") {
			XdrError::UnknownType { name } => assert_eq!(name, "NotARealType"),
			other => panic!("expected UnknownType, got {other:?}"),
		}
	}

	#[test]
	fn non_boolean_word_is_rejected() {
		let mut w = XdrWriter::new();
		w.u32(2);
		match decode_err(&w.into_bytes(), "Bool") {
			XdrError::InvalidBool { value: 2, at: 0 } => {}
			other => panic!("expected InvalidBool, got {other:?}"),
		}
	}

	#[test]
	fn unmapped_enum_value_is_rejected() {
		let mut w = XdrWriter::new();
		w.i32(99);
		match decode_err(&w.into_bytes(), "MemoType") {
			XdrError::InvalidEnumValue { enum_name: "MemoType", value: 99 } => {}
			other => panic!("expected InvalidEnumValue, got {other:?}"),
		}
	}

	#[test]
	fn option_marker_must_be_zero_or_one() {
		let mut w = XdrWriter::new();
		w.string("name");
		w.u32(7);
		match decode_err(&w.into_bytes(), "ManageDataOp") {
			XdrError::InvalidOptionMarker { value: 7, .. } => {}
			other => panic!("expected InvalidOptionMarker, got {other:?}"),
		}
	}

	#[test]
	fn valid_member_without_arm_is_rejected() {
		// envelopeTypeScp is a real member but envelopes never carry it
		let mut w = XdrWriter::new();
		w.i32(1);
		match decode_err(&w.into_bytes(), "TransactionEnvelope") {
			XdrError::NoUnionArm { type_name: "TransactionEnvelope", discriminant: 1 } => {}
			other => panic!("expected NoUnionArm, got {other:?}"),
		}
	}

	#[test]
	fn trailing_bytes_are_rejected() {
		let mut w = XdrWriter::new();
		w.u32(5);
		w.u32(6);
		match decode_err(&w.into_bytes(), "Uint32") {
			XdrError::TrailingBytes { type_name, leftover: 4 } => assert_eq!(type_name, "Uint32"),
			other => panic!("expected TrailingBytes, got {other:?}"),
		}
	}

	#[test]
	fn declared_string_bound_is_enforced() {
		let mut w = XdrWriter::new();
		w.opaque_var(&[b'x'; 40]);
		match decode_err(&w.into_bytes(), "String32") {
			XdrError::LengthOutOfRange { len: 40, max: 32 } => {}
			other => panic!("expected LengthOutOfRange, got {other:?}"),
		}
	}

	#[test]
	fn length_prefix_cannot_exceed_input() {
		let mut w = XdrWriter::new();
		w.u32(1000);
		w.u32(0);
		match decode_err(&w.into_bytes(), "ScBytes") {
			XdrError::UnexpectedEof { need: 1000, .. } => {}
			other => panic!("expected UnexpectedEof, got {other:?}"),
		}
	}

	#[test]
	fn array_count_limit_applies() {
		let mut w = XdrWriter::new();
		w.array_len(3);
		for _ in 0..3 {
			w.i32(1); // scvVoid
		}
		let opt = DecodeOptions { max_array_elems: 2, ..DecodeOptions::default() };
		match decode_value(&w.into_bytes(), "ScVec", &opt).expect_err("count above limit") {
			XdrError::ArrayTooLarge { count: 3, max: 2 } => {}
			other => panic!("expected ArrayTooLarge, got {other:?}"),
		}
	}

	#[test]
	fn nesting_depth_limit_applies() {
		// vec-of-vec nesting: every level adds array + union + arm depth
		let mut w = XdrWriter::new();
		w.array_len(1);
		w.i32(16); // scvVec
		w.present(true);
		w.array_len(1);
		w.i32(1); // scvVoid
		let opt = DecodeOptions { max_depth: 3, ..DecodeOptions::default() };
		match decode_value(&w.into_bytes(), "ScVec", &opt).expect_err("nesting above limit") {
			XdrError::DepthExceeded { max_depth: 3 } => {}
			other => panic!("expected DepthExceeded, got {other:?}"),
		}
	}

	#[test]
	fn truncated_input_reports_offsets() {
		let mut w = XdrWriter::new();
		w.u32(9);
		match decode_err(&w.into_bytes(), "Uint64") {
			XdrError::UnexpectedEof { at: 0, need: 8, rem: 4 } => {}
			other => panic!("expected UnexpectedEof, got {other:?}"),
		}
	}
}
