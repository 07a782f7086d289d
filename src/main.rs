use xrpl_address_codec::{CodecError, Network, decode_x_address, encode_x_address};

fn main() {
    env_logger::init();

    let classic_address = "rGWrZyQqhTp9Xu7G5Pkayo7bXjH4k4QYpf";
    let tag = Some(276);

    let x_addr = match encode_x_address(classic_address, tag, Network::Mainnet) {
        Ok(x_addr) => x_addr,
        // Tag wider than 32 bits
        Err(CodecError::InvalidTag(tag)) => {
            eprintln!("Invalid tag: {tag}");
            std::process::exit(1);
        }
        // Classic address failed to decode
        Err(e) => {
            eprintln!("Invalid classic address {classic_address}: {e}");
            std::process::exit(1);
        }
    };
    println!("Encoded X-Address        : {x_addr}");

    match decode_x_address(&x_addr) {
        Ok(decoded) => {
            println!("Decoded Network          : {:?}", decoded.network);
            println!("Decoded Classic Address  : {}", decoded.classic_address);
            println!("Decoded Account ID (hex) : {}", decoded.account_id_hex());
            match decoded.tag {
                Some(tag) => println!("Decoded Tag              : {tag}"),
                None => println!("Decoded Tag              : none"),
            }
        }

        // Base58 or checksum-level errors
        Err(e @ (CodecError::InvalidCharacter { .. }
        | CodecError::Base58(_)
        | CodecError::InvalidInputSize(_)
        | CodecError::ChecksumInvalid)) => {
            eprintln!("Base58Check decoding error: {e}");
        }
        // Prefix didn't match mainnet or testnet
        Err(CodecError::BadPrefix(prefix)) => {
            eprintln!("Unknown prefix 0x{:02X}{:02X}", prefix[0], prefix[1]);
        }
        // 64-bit tag or malformed padding
        Err(CodecError::UnsupportedXAddress { flag }) => {
            eprintln!("Unsupported X-address (flag {flag})");
        }
        Err(e) => {
            eprintln!("Decoding error: {e}");
        }
    }
}
