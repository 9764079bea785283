use std::io::{BufRead, Write};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::accelerator::simulation::simulate_time_step;
use crate::accelerator::Accelerator;
use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::event::{Event, EventHandler};
use crate::ui::{self, status, Tone};

const COMMAND_PROMPT: &str = "Enter a command ('exit' to quit, 'help' for command list): ";
const ENERGY_PROMPT: &str = "Enter new particle energy (GeV): ";
const TYPE_PROMPT: &str = "Enter new particle type: ";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    Exit,
    ChangeEnergy,
    Simulate,
    Status,
    Help,
}

impl Command {
    pub fn all() -> &'static [Command] {
        &[Command::Exit, Command::ChangeEnergy, Command::Simulate, Command::Status, Command::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::ChangeEnergy => "changeEnergy",
            Command::Simulate => "simulate",
            Command::Status => "status",
            Command::Help => "help",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn parse(token: &str) -> Option<Command> {
        Command::all().iter().copied().find(|cmd| cmd.name() == token)
    }
}

pub fn parse_energy(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| SimError::InvalidEnergy(token.to_string()))
}

pub struct App {
    pub should_quit: bool,
    pub accelerator: Accelerator,
    rng: Pcg64,
    color: bool,
}

impl App {
    pub fn new(config: &SimConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        log::info!("perturbation rng seeded with {}", seed);
        Self {
            should_quit: false,
            accelerator: Accelerator::new(),
            rng: Pcg64::seed_from_u64(seed),
            color: config.color,
        }
    }

    /// Read-eval-print loop. Returns after `exit` or at end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, events: &mut EventHandler<R>, out: &mut W) -> Result<()> {
        ui::write_lines(out, &status::title_lines(), self.color)?;

        while !self.should_quit {
            ui::prompt(out, COMMAND_PROMPT, self.color)?;
            match events.next()? {
                Event::Token(token) => self.on_command(&token, events, out)?,
                Event::Eof => self.on_eof(out)?,
            }
        }
        Ok(())
    }

    pub fn on_command<R: BufRead, W: Write>(
        &mut self,
        token: &str,
        events: &mut EventHandler<R>,
        out: &mut W,
    ) -> Result<()> {
        let Some(command) = Command::parse(token) else {
            return self.say(out, "Unknown command. Type 'help' for command list.", Tone::Warning);
        };

        match command {
            Command::Exit => {
                self.should_quit = true;
                self.say(out, "Exiting simulator.", Tone::Info)
            }
            Command::ChangeEnergy => self.change_energy(events, out),
            Command::Simulate => {
                simulate_time_step(&mut self.accelerator, &mut self.rng);
                self.say(out, "Simulation complete.", Tone::Info)
            }
            Command::Status => {
                ui::write_lines(out, &status::status_lines(&self.accelerator), self.color)?;
                Ok(())
            }
            Command::Help => {
                ui::write_lines(out, &status::help_lines(), self.color)?;
                Ok(())
            }
        }
    }

    fn change_energy<R: BufRead, W: Write>(&mut self, events: &mut EventHandler<R>, out: &mut W) -> Result<()> {
        let Some(energy) = self.read_energy(events, out)? else {
            return self.on_eof(out);
        };

        ui::prompt(out, TYPE_PROMPT, self.color)?;
        let particle_type = match events.next()? {
            Event::Token(token) => token,
            Event::Eof => return self.on_eof(out),
        };

        self.accelerator.change_particle(energy, &particle_type);
        log::info!(
            "particle set to {} at {} GeV",
            self.accelerator.particle_type,
            self.accelerator.particle_energy
        );
        self.say(out, "Particle energy and type changed.", Tone::Info)
    }

    /// Prompt until a token parses as a number. `None` means input ran out.
    fn read_energy<R: BufRead, W: Write>(
        &mut self,
        events: &mut EventHandler<R>,
        out: &mut W,
    ) -> Result<Option<f64>> {
        loop {
            ui::prompt(out, ENERGY_PROMPT, self.color)?;
            let token = match events.next()? {
                Event::Token(token) => token,
                Event::Eof => return Ok(None),
            };
            match parse_energy(&token) {
                Ok(energy) => return Ok(Some(energy)),
                Err(SimError::InvalidEnergy(bad)) => {
                    log::warn!("rejected particle energy {:?}", bad);
                    let text = format!("Invalid particle energy '{}'. Please enter a number.", bad);
                    self.say(out, text, Tone::Warning)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn on_eof<W: Write>(&mut self, out: &mut W) -> Result<()> {
        log::info!("end of input, leaving simulator");
        self.should_quit = true;
        // The pending prompt has no newline yet.
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    fn say<W: Write>(&self, out: &mut W, text: impl Into<String>, tone: Tone) -> Result<()> {
        ui::write_lines(out, &[ui::message(text, tone)], self.color)?;
        Ok(())
    }
}
