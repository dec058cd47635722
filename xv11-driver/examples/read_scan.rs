use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use tracing_subscriber::EnvFilter;
use xv11_data::Scan;
use xv11_driver::{run_driver, DriverConfig, ScanReader};

/// Reads data from an XV-11 LiDAR and prints every valid reading.
#[derive(Parser)]
#[command(disable_version_flag = true)]
struct Args {
    /// The device path to a serial port
    #[arg(default_value = "/dev/ttyUSB0")]
    port: String,
    /// Decode a captured byte stream instead of a serial port
    #[arg(long)]
    replay: Option<String>,
    /// Print one JSON document per scan
    #[arg(long)]
    json: bool,
    /// Stop after this many scans from the serial port, runs until killed otherwise
    #[arg(long)]
    scans: Option<usize>,
}

fn print_scan(scan: &Scan, json: bool) {
    if json {
        match serde_json::to_string(scan) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("{e}"),
        }
        return;
    }
    if let Some(rpm) = scan.mean_rpm() {
        println!("#rpm: {rpm}");
    }
    for observation in &scan.observations {
        println!(
            "angle: {}\tdistance: {}\tstrength: {}{}",
            observation.angle_degrees,
            observation.distance_mm,
            observation.signal_strength,
            if observation.flags.strength_warning { "\t(close)" } else { "" },
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    if let Some(path) = args.replay {
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to open \"{}\". Error: {}", path, e);
                std::process::exit(1);
            }
        };
        let mut reader = ScanReader::new(BufReader::new(file));
        for scan in reader.by_ref() {
            match scan {
                Ok(scan) => print_scan(&scan, args.json),
                Err(e) => eprintln!("{e}"),
            }
        }
        eprintln!("{} frames dropped", reader.dropped_frames());
        return;
    }

    let (driver_threads, scan_rx) = match run_driver(&DriverConfig::new(&args.port)) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Failed to open \"{}\". Error: {}", args.port, e);
            std::process::exit(1);
        }
    };

    for scan in scan_rx.iter().take(args.scans.unwrap_or(usize::MAX)) {
        print_scan(&scan, args.json);
    }

    drop(driver_threads);
}
