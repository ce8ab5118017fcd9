use super::named::NAMED_FORMATS;

pub struct FormatsArgs {
    pub json: bool,
}

pub fn run(args: FormatsArgs) {
    if args.json {
        match serde_json::to_string_pretty(NAMED_FORMATS) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Named formats ({}):", NAMED_FORMATS.len());
    for format in NAMED_FORMATS {
        println!("  {:<12} {:<20} {}", format.name, format.spec, format.layout);
    }
}
