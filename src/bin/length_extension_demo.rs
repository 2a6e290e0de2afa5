use mdforge::length_extension::{search_key_length, KeyLengthSearchConfig};
use mdforge::prefix_mac::{PrefixMac, PrefixMacKeyGenConfig};
use mdforge::sha256::digest;
use rand::Rng;

fn main() {
    // Sanity check against a published vector before attacking anything
    let abc = digest(b"abc");
    println!("SHA-256(\"abc\") = {}", abc);
    if abc != "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad" {
        eprintln!("SHA-256 implementation does not match the FIPS 180-4 vector");
        std::process::exit(1);
    }

    // The server picks a secret key the attacker never sees
    let key_len = rand::thread_rng().gen_range(1..=32);
    let server = PrefixMac::generate(&PrefixMacKeyGenConfig {
        key_len,
        seed: None,
    });

    let original = b"comment=hello";
    let extension = b";admin=true";
    let tag = server.sign(original);
    println!("Original message:     {:?}", String::from_utf8_lossy(original));
    println!("Original MAC:         {}", tag);

    let config = KeyLengthSearchConfig::default();
    let result = search_key_length(original, &tag, extension, &config, |msg, forged| {
        server.verify(msg, forged)
    });

    match result {
        Ok(Some(hit)) => {
            println!("Guessed key length:   {}", hit.key_len);
            println!("Forged message:       {}", hit.forgery.message.escape_ascii());
            println!("Forged MAC:           {}", hit.forgery.digest);
            println!("Server accepts forged MAC without us knowing the key.");
        }
        Ok(None) => {
            println!(
                "No key length in {}..={} was accepted.",
                config.min_key_len, config.max_key_len
            );
        }
        Err(err) => {
            eprintln!("Attack failed: {}", err);
            std::process::exit(1);
        }
    }
}
