#![allow(dead_code)]

use rand::Rng;
use std::io::Error;
use std::path::Path;
use tempfile::NamedTempFile;

pub const HEADER: [&str; 3] = ["description", "quantity", "rate"];
pub const PRODUCTS: [&str; 3] = ["T-shirt", "Tracksuit", "Sweater"];

/// Writes the given rows, after the header, to a temporary CSV file.
pub fn rows_csv(rows: &[[&str; 3]]) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    let mut wtr = csv::Writer::from_path(file.path()).unwrap();
    wtr.write_record(HEADER).unwrap();
    for row in rows {
        wtr.write_record(row).unwrap();
    }
    wtr.flush().unwrap();
    file
}

/// Writes `rows` random filled rows with whole-rupee rates.
pub fn generate_rows_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let mut rng = rand::thread_rng();
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;

    for _ in 0..rows {
        let product = PRODUCTS[rng.gen_range(0..PRODUCTS.len())];
        let quantity = rng.gen_range(0..20u32).to_string();
        let rate = format!("{}.00", rng.gen_range(0..500u32));
        wtr.write_record([product, quantity.as_str(), rate.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
