//! Minimal walk through put, get, tick and close.
//!
//! Run with `cargo run --example hello`.

use ttl_hash::TtlHash;

fn main() -> anyhow::Result<()> {
    let mut table: TtlHash<i32> = TtlHash::open(16, 3, None)?;

    table.put(b"hello", 42)?;
    table.put(b"world", 99)?;

    if let Some(v) = table.get(b"hello") {
        println!("hello = {v}");
    }

    table.tick();
    table.tick();
    table.tick();

    if table.get(b"hello").is_none() {
        println!("hello expired");
    }

    table.close();
    Ok(())
}
