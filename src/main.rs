use clap::{arg, crate_version, Command};
use fgkhuff::codec;
use std::fs::File;

const RCH: &str = "unreachable was reached";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let long_help = "Examples:
---------
Encode:        `fgkhuff encode -i my_file -o my_file.fgk`
Decode:        `fgkhuff decode -i my_file.fgk -o my_file`";

    let mut main_cmd = Command::new("fgkhuff")
        .about("Adaptive (FGK) Huffman coding over byte streams")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(
        Command::new("encode")
            .arg(arg!(-i --input <PATH> "input path").required(true))
            .arg(arg!(-o --output <PATH> "output path").required(true))
            .about("encode a file"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("decode")
            .arg(arg!(-i --input <PATH> "input path").required(true))
            .arg(arg!(-o --output <PATH> "output path").required(true))
            .about("decode a file"),
    );

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("encode") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let mut in_file = File::open(path_in)?;
        let mut out_file = File::create(path_out)?;
        let (in_size, out_size) = codec::encode(&mut in_file, &mut out_file)?;
        log::info!("encoded {} into {}", in_size, out_size);
    }

    if let Some(cmd) = matches.subcommand_matches("decode") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let mut in_file = File::open(path_in)?;
        let mut out_file = File::create(path_out)?;
        let (in_size, out_size) = codec::decode(&mut in_file, &mut out_file)?;
        log::info!("decoded {} into {}", in_size, out_size);
    }

    Ok(())
}
