use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Lower bounds of buckets 1, 2 and 3. Everything below the first bound is bucket 0.
const BUCKET_BOUNDS: [u16; 3] = [64, 128, 192];

/// Bucket index for an 8-bit channel value.
fn bucket_exact(value: u16) -> u8 {
    BUCKET_BOUNDS.iter().filter(|&&bound| value >= bound).count() as u8
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("bucket_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // Generate BUCKET_LUT (256 entries)
    writeln!(file, "/// Lookup table for channel quantization").unwrap();
    writeln!(file, "/// Index: 8-bit channel value, Value: bucket 0..=3").unwrap();
    writeln!(file, "pub static BUCKET_LUT: [u8; 256] = [").unwrap();
    for value in 0..256u16 {
        if value > 0 && value % 16 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, " {},", bucket_exact(value)).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    // Rerun if build.rs changes
    println!("cargo::rerun-if-changed=build.rs");
}
