use anyhow::Result;

fn main() -> Result<()> {
    let doc = horizon_auth::horizon::openapi();
    let json = serde_json::to_string_pretty(&doc)?;
    println!("{json}");
    Ok(())
}
