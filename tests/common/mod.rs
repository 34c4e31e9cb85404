use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 12] = [
    "type",
    "user",
    "amount",
    "currency",
    "method",
    "card_number",
    "expiry",
    "paypal_account",
    "discount_code",
    "fraud_level",
    "transaction_id",
    "reason",
];

/// Writes a requests CSV with `rows` valid payments, alternating between
/// credit card and PayPal.
pub fn generate_requests_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;

    for i in 1..=rows {
        let user = format!("user-{}", i % 50);
        if i % 2 == 0 {
            wtr.write_record([
                "payment",
                &user,
                "25",
                "USD",
                "credit_card",
                "4111111111111111",
                "12/27",
                "",
                "",
                "",
                "",
                "",
            ])?;
        } else {
            wtr.write_record([
                "payment",
                &user,
                "25",
                "USD",
                "paypal",
                "",
                "",
                "payer@example.com",
                "",
                "",
                "",
                "",
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
