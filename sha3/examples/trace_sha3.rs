use ks_sha3::{DigestLength, Sha3, Sponge, pad};
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const INPUT: &[u8] = b"The quick brown fox jumps over the lazy dog";

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() -> Result<(), ks_sha3::Sha3Error> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    for length in DigestLength::ALL {
        let digest = Sha3::new(length).hash(INPUT);
        println!("{length}: {}", to_hex(&digest));
    }

    // The same SHA3-256 digest, one sponge phase at a time.
    let hasher = Sha3::from_bits(256)?;
    let params = *hasher.params();
    let block = pad(INPUT, &params)?;
    let mut sponge = Sponge::new(params);
    sponge.absorb_padded(&block)?;
    println!("stepwise SHA3-256: {}", to_hex(&sponge.finalize()?));

    // 300 bytes is more than one 136-byte rate, so the sponge permutes twice more.
    sponge.reset();
    sponge.absorb_padded(&block)?;
    let extended = sponge.squeeze(300)?;
    println!("300 squeezed bytes, last 8: {}", to_hex(&extended[292..]));

    Ok(())
}
