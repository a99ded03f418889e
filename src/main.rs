//! Gliss - tablet theremin

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use gliss::config;
use gliss::mapping::{OctaveShift, Sample, Session};
use gliss::midi::{self, MidiOut};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            config: config_path,
            port,
        } => {
            println!("Loading configuration from {:?}...", config_path);
            let cfg = config::load_config(&config_path)?;
            let session = cfg.session()?;

            let port_name = port.or_else(|| cfg.midi.port.clone());
            let out = MidiOut::connect(port_name.as_deref())?;

            play(session, out, cfg.midi.channel, cfg.midi.modulation_cc)?;
        }

        Commands::Ports => {
            let ports = midi::list_ports()?;
            if ports.is_empty() {
                println!("No MIDI output ports found.");
            } else {
                println!("MIDI output ports:");
                for name in ports {
                    println!("  - {}", name);
                }
                if let Some(name) = midi::default_port_name() {
                    println!("Default: {}", name);
                }
            }
        }

        Commands::Check {
            config: config_path,
        } => {
            config::load_config(&config_path)?;
            println!("Configuration OK.");
        }

        Commands::Init => {
            print!("{}", config::example_yaml()?);
        }
    }

    Ok(())
}

/// Drive a session from stdin lines until EOF, `quit`, or Ctrl-C.
///
/// Protocol: `x y pressure` plays a sample, `up` lifts the stylus,
/// `octave up|down` shifts the range, `algo` flips the algorithm.
fn play(mut session: Session, out: MidiOut, channel: u8, cc: u8) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || r.store(false, Ordering::SeqCst))?;

    let range = session.range();
    println!("Range: {} - {}", range.low(), range.high());
    println!("Commands: 'x y pressure' | up | octave up|down | algo | quit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !running.load(Ordering::SeqCst) {
            break;
        }
        let line = line?;
        let mut parts = line.split_whitespace();

        let events = match parts.next() {
            None => continue,
            Some("quit") => break,
            Some("up") => session.lift_off(),
            Some("algo") => {
                println!("Algorithm: {:?}", session.switch_algorithm());
                continue;
            }
            Some("octave") => {
                let direction = match parts.next() {
                    Some("up") => OctaveShift::Up,
                    Some("down") => OctaveShift::Down,
                    _ => {
                        println!("Usage: octave up|down");
                        continue;
                    }
                };
                if session.shift_octave(direction) {
                    let range = session.range();
                    println!("Range: {} - {}", range.low(), range.high());
                } else {
                    println!("Range already at the limit.");
                }
                continue;
            }
            Some(_) => match parse_sample(&line) {
                Some(sample) => session.sample(sample),
                None => {
                    println!("Expected: x y pressure (each 0.0-1.0)");
                    continue;
                }
            },
        };

        for event in events {
            out.send(midi::encode(&event, channel, cc))?;
        }
    }

    // Leave nothing sounding on the way out.
    for event in session.lift_off() {
        out.send(midi::encode(&event, channel, cc))?;
    }

    Ok(())
}

fn parse_sample(line: &str) -> Option<Sample> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let pressure = parts.next()?.parse().ok()?;
    Some(Sample::new(x, y, pressure))
}
