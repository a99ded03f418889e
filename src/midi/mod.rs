//! MIDI output transport
//!
//! Encodes control events as raw MIDI bytes and sends them to a midir
//! output port from a dedicated sender thread.

use std::sync::mpsc::{self, Sender};
use std::thread;

use anyhow::{anyhow, Result};
use midir::MidiOutput;

use crate::mapping::ControlEvent;

/// MIDI message types emitted by the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiMessage {
    /// Note on: channel (0-15), note (0-127), velocity (0-127)
    NoteOn(u8, u8, u8),
    /// Note off: channel (0-15), note (0-127), velocity (0-127)
    NoteOff(u8, u8, u8),
    /// Channel pressure: channel (0-15), value (0-127)
    Aftertouch(u8, u8),
    /// Control change: channel (0-15), controller (0-127), value (0-127)
    ControlChange(u8, u8, u8),
}

impl MidiMessage {
    /// Convert to raw MIDI bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        match *self {
            MidiMessage::NoteOn(ch, note, vel) => vec![0x90 | (ch & 0x0F), note & 0x7F, vel & 0x7F],
            MidiMessage::NoteOff(ch, note, vel) => {
                vec![0x80 | (ch & 0x0F), note & 0x7F, vel & 0x7F]
            }
            MidiMessage::Aftertouch(ch, value) => vec![0xD0 | (ch & 0x0F), value & 0x7F],
            MidiMessage::ControlChange(ch, ctrl, val) => {
                vec![0xB0 | (ch & 0x0F), ctrl & 0x7F, val & 0x7F]
            }
        }
    }
}

/// Encode a mapper event for the wire.
///
/// Note and aftertouch events play on `channel`; control changes carry
/// their own channel from the session and use controller `cc`.
pub fn encode(event: &ControlEvent, channel: u8, cc: u8) -> MidiMessage {
    match *event {
        ControlEvent::NoteOn { note, velocity } => MidiMessage::NoteOn(channel, note, velocity),
        ControlEvent::NoteOff { note } => MidiMessage::NoteOff(channel, note, 0),
        ControlEvent::Aftertouch { value } => MidiMessage::Aftertouch(channel, value),
        ControlEvent::ControlChange {
            channel: cc_channel,
            value,
        } => MidiMessage::ControlChange(cc_channel, cc, value),
    }
}

/// MIDI output connection.
pub struct MidiOut {
    sender: Sender<MidiOutCommand>,
}

enum MidiOutCommand {
    Send(MidiMessage),
    Stop,
}

impl MidiOut {
    /// Connect to a MIDI output port. `port_name` is matched as a
    /// substring; `None` picks the first available port.
    pub fn connect(port_name: Option<&str>) -> Result<Self> {
        let midi_out = MidiOutput::new("Gliss Output")?;
        let ports = midi_out.ports();

        if ports.is_empty() {
            return Err(anyhow!("No MIDI output ports available"));
        }

        let port = if let Some(name) = port_name {
            ports
                .iter()
                .find(|p| {
                    midi_out
                        .port_name(p)
                        .map(|n| n.contains(name))
                        .unwrap_or(false)
                })
                .ok_or_else(|| anyhow!("MIDI port '{}' not found", name))?
                .clone()
        } else {
            ports[0].clone()
        };

        let port_name_actual = midi_out.port_name(&port)?;
        let conn = midi_out
            .connect(&port, "gliss-output")
            .map_err(|e| anyhow!("Failed to connect to MIDI port: {}", e))?;

        let (sender, receiver) = mpsc::channel::<MidiOutCommand>();

        // Spawn thread to handle MIDI messages
        thread::spawn(move || {
            let mut conn = conn;
            while let Ok(cmd) = receiver.recv() {
                match cmd {
                    MidiOutCommand::Send(msg) => {
                        let bytes = msg.to_bytes();
                        let _ = conn.send(&bytes);
                    }
                    MidiOutCommand::Stop => break,
                }
            }
        });

        eprintln!("MIDI output connected to: {}", port_name_actual);

        Ok(Self { sender })
    }

    /// Send a message to the port.
    pub fn send(&self, msg: MidiMessage) -> Result<()> {
        self.sender.send(MidiOutCommand::Send(msg))?;
        Ok(())
    }

    /// Stop the sender thread.
    pub fn stop(&self) {
        let _ = self.sender.send(MidiOutCommand::Stop);
    }
}

impl Drop for MidiOut {
    fn drop(&mut self) {
        self.stop();
    }
}

/// List available MIDI output ports.
pub fn list_ports() -> Result<Vec<String>> {
    let midi_out = MidiOutput::new("Gliss Port List")?;
    let ports = midi_out.ports();

    let names: Vec<String> = ports
        .iter()
        .filter_map(|p| midi_out.port_name(p).ok())
        .collect();

    Ok(names)
}

/// Get the default MIDI output port name.
pub fn default_port_name() -> Option<String> {
    let midi_out = MidiOutput::new("Gliss Default Port").ok()?;
    let ports = midi_out.ports();
    ports.first().and_then(|p| midi_out.port_name(p).ok())
}
