//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use huffcode::tools::cli::{huffopts_init, HuffOpts, Input, SAMPLE_TEXT};
use huffcode::{Codec, FrequencyTable};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }

    let options = huffopts_init();

    if let Err(e) = run(&options) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Done.");
}

fn run(opts: &HuffOpts) -> Result<(), Box<dyn std::error::Error>> {
    let data = match &opts.input {
        Input::File(name) => std::fs::read(name)?,
        Input::Text(text) => text.as_bytes().to_vec(),
        Input::Sample => SAMPLE_TEXT.as_bytes().to_vec(),
    };

    let frequencies = FrequencyTable::from_bytes(&data);
    let codec = Codec::new(&frequencies)?;

    if opts.show_table {
        let mut table: Vec<(&u8, &String)> = codec.code_table().iter().collect();
        table.sort_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| a.1.cmp(b.1)));
        for (byte, code) in table {
            let count = frequencies.get(byte).unwrap_or(0);
            println!("{:>6} {:?} x{:<8} {}", byte, *byte as char, count, code);
        }
    }

    let payload = codec.encode(&data)?;
    let decoded = codec.decode_payload(&payload)?;
    if decoded != data {
        return Err("decoded data does not match the input".into());
    }

    info!(
        "{} bytes -> {} bits in {} bytes ({} padding bits, {:.1}% of original), {} symbols, tree depth {}.",
        data.len(),
        payload.bit_count,
        payload.bytes.len(),
        payload.padding_bits(),
        payload.bytes.len() as f64 * 100.0 / data.len() as f64,
        codec.len(),
        codec.tree().depth()
    );
    Ok(())
}
