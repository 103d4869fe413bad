//! Basic usage example for qdatastream
//!
//! Run with: cargo run --example basic_usage

use std::collections::BTreeMap;

use qdatastream::*;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug)]
struct Point {
    x: i32,
    y: i32,
}

fn encode_point(w: &mut Writer, p: &Point) -> Result<()> {
    w.write_int32(p.x)?;
    w.write_int32(p.y)
}

fn decode_point(r: &mut Reader<'_>) -> Result<Point> {
    Ok(Point {
        x: r.read_int32()?,
        y: r.read_int32()?,
    })
}

fn main() -> Result<()> {
    println!("qdatastream Basic Usage Example");
    println!("===============================");

    // Example 1: Primitives in network byte order
    println!("\n1. Primitives (Qt 4.6, big-endian):");
    {
        let mut writer = Writer::new();
        writer.write_uint32(0x00100020)?;
        writer.write_bool(true)?;
        writer.write_str("AB")?;
        writer.write_bytes(None)?;
        println!("  Encoded: {}", hex(writer.as_slice()));

        let bytes = writer.into_inner();
        let mut reader = Reader::new(&bytes);
        println!(
            "  Decoded: {:#x}, {}, {:?}, {:?}",
            reader.read_uint32()?,
            reader.read_bool()?,
            reader.read_string()?,
            reader.read_bytes()?
        );
    }

    // Example 2: Same values, little-endian
    println!("\n2. Little-endian:");
    {
        let config = Config::new().with_byte_order(ByteOrder::LittleEndian);
        let mut writer = Writer::with_config(config);
        writer.write_uint32(0x00100020)?;
        writer.write_str("AB")?;
        println!("  Encoded: {}", hex(writer.as_slice()));
    }

    // Example 3: Floating-point precision redirect
    println!("\n3. Float precision:");
    for (version, precision) in [
        (Version::Qt4_5, FloatingPointPrecision::Double),
        (Version::Qt4_6, FloatingPointPrecision::Double),
        (Version::Qt4_6, FloatingPointPrecision::Single),
    ] {
        let config = Config::new()
            .with_version(version)
            .with_precision(precision);
        let mut writer = Writer::with_config(config);
        writer.write_float(1.5)?;
        writer.write_double(1.5)?;
        println!(
            "  {} {:?}: float+double = {} bytes ({})",
            version,
            precision,
            writer.len(),
            hex(writer.as_slice())
        );
    }

    // Example 4: Containers
    println!("\n4. Containers:");
    {
        let mut scores = BTreeMap::new();
        scores.insert("alice".to_string(), 90u8);
        scores.insert("bob".to_string(), 75u8);

        let points = [Point { x: 1, y: -1 }, Point { x: 100, y: 200 }];
        let point = Element::custom(encode_point, decode_point);

        let mut writer = Writer::new();
        writer.write_list(&[1i32, 2, 3], &Element::tag(TypeTag::Int32))?;
        writer.write_map(
            &scores,
            &Element::tag(TypeTag::Str),
            &Element::tag(TypeTag::UInt8),
        )?;
        writer.write_list(&points, &point)?;
        println!("  Encoded {} bytes", writer.len());

        let bytes = writer.into_inner();
        let mut reader = Reader::new(&bytes);
        let ints: Vec<i32> = reader.read_list(&Element::tag(TypeTag::Int32))?;
        let decoded: BTreeMap<String, u8> =
            reader.read_map(&Element::tag(TypeTag::Str), &Element::tag(TypeTag::UInt8))?;
        let decoded_points = reader.read_list(&point)?;
        println!("  List:   {:?}", ints);
        println!("  Map:    {:?}", decoded);
        println!("  Points: {:?}", decoded_points);
    }

    // Example 5: Dispatch by tag name
    println!("\n5. Dispatch by name:");
    {
        let mut writer = Writer::new();
        writer.write_named("int16", &Value::Int16(-2))?;
        match writer.write_named("qreal", &Value::Double(1.0)) {
            Err(e) => println!("  'qreal' rejected: {}", e),
            Ok(()) => println!("  'qreal' unexpectedly accepted"),
        }
        println!("  Encoded: {}", hex(writer.as_slice()));
    }

    // Example 6: Error handling
    println!("\n6. Error Handling:");
    {
        let truncated = [0x00, 0x00, 0x00, 0x08, 0x00, 0x41];
        match Reader::new(&truncated).read_string() {
            Err(e) => println!("  Truncated text: {}", e),
            Ok(s) => println!("  Unexpected text: {:?}", s),
        }

        let unpaired = [0x00, 0x00, 0x00, 0x02, 0xd8, 0x00];
        match Reader::new(&unpaired).read_string() {
            Err(e) => println!("  Unpaired surrogate: {}", e),
            Ok(s) => println!("  Unexpected text: {:?}", s),
        }
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}
