//! Numbered text menu driving a [`City`].
//!
//! Reads answers line by line and prints whatever narration the city
//! returns. Every error is reported and the menu comes back; end of input
//! behaves like choosing exit.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use ecocity_logic::activity::Activity;
use ecocity_logic::building::BuildingKind;
use ecocity_logic::command::Command;
use ecocity_logic::error::CityError;
use ecocity_logic::power::PowerSourceKind;
use ecocity_logic::transport::BusKind;
use ecocity_logic::City;

const MAIN_MENU: &str = "\
1. Add Building
2. Add Bus
3. Add Citizen
4. Add Power Source
5. Show All Objects
6. Upgrade Building
7. Add Car and Drive
8. Show All Emissions
9. Save To Log
10. Show Log
0. Exit
Choice: ";

const ACTIVITY_MENU: &str = "\
Which activity would you like to do?
1. Swimming
2. Gym
3. Walking
4. Tree Planting
Choice: ";

pub struct Menu<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// Loop until the user exits or input runs out.
    pub fn run(&mut self, city: &mut City) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n--- Smart Eco City ---")?;
            let Some(answer) = self.prompt(MAIN_MENU)? else {
                break;
            };
            let keep_going = match answer.trim().parse::<u32>() {
                Ok(0) => false,
                Ok(choice @ 1..=10) => {
                    self.dispatch(city, choice)?;
                    !self.closed
                }
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        writeln!(self.output, "Exiting Smart Eco City Simulation. Goodbye!")?;
        self.output.flush()
    }

    fn dispatch(&mut self, city: &mut City, choice: u32) -> io::Result<()> {
        match choice {
            1 => self.add_building(city),
            2 => self.add_bus(city),
            3 => self.add_citizen(city),
            4 => self.add_power_source(city),
            5 => {
                let lines = city.list_all();
                self.print_lines(&lines)
            }
            6 => self.upgrade_building(city),
            7 => self.add_car(city),
            8 => {
                let result = city.execute(Command::ShowEmissions);
                self.report(result)
            }
            9 => match city.save_log() {
                Ok(lines) => self.print_lines(&lines),
                Err(err) => {
                    log::error!("Saving log failed: {err}");
                    writeln!(self.output, "Error opening file.")
                }
            },
            10 => match city.show_log() {
                Ok(lines) => self.print_lines(&lines),
                Err(CityError::FileUnavailable { .. }) => {
                    writeln!(self.output, "No log file found.")
                }
                Err(err) => self.report(Err(err)),
            },
            _ => writeln!(self.output, "Invalid choice."),
        }
    }

    fn add_building(&mut self, city: &mut City) -> io::Result<()> {
        if city.buildings().is_full() {
            return writeln!(self.output, "Building limit reached.");
        }
        let Some(name) = self.prompt("Building name: ")? else {
            return Ok(());
        };
        let Some(energy) = self.prompt_number::<u32>("Energy use: ")? else {
            return Ok(());
        };
        let Some(kind) = self.prompt_number::<u32>("Type (1. Residential, 2. Commercial): ")?
        else {
            return Ok(());
        };
        let kind = if kind == 1 {
            BuildingKind::Residential
        } else {
            BuildingKind::Commercial
        };
        let result = city.add_building(name, energy, kind);
        self.report(result)
    }

    fn add_bus(&mut self, city: &mut City) -> io::Result<()> {
        if city.transports().is_full() {
            return writeln!(self.output, "Bus limit reached.");
        }
        let Some(name) = self.prompt("Enter Bus Name: ")? else {
            return Ok(());
        };
        let Some(kind) =
            self.prompt_number::<u32>("Select Bus Type:\n1. Electric Bus\n2. Diesel Bus\nChoice: ")?
        else {
            return Ok(());
        };
        let (kind, distance) = if kind == 1 {
            (BusKind::Electric, 0)
        } else {
            let Some(distance) = self.prompt_number::<i64>("Enter distance travelled in KM: ")?
            else {
                return Ok(());
            };
            (BusKind::Diesel, distance)
        };
        let result = city.add_bus(name, kind, distance);
        self.report(result)
    }

    fn add_citizen(&mut self, city: &mut City) -> io::Result<()> {
        if city.citizens().is_full() {
            return writeln!(self.output, "Citizen limit reached.");
        }
        let Some(name) = self.prompt("Citizen name: ")? else {
            return Ok(());
        };
        let result = city.add_citizen(name);
        let added = result.is_ok();
        self.report(result)?;
        if !added {
            return Ok(());
        }
        let index = city.citizens().len() - 1;

        loop {
            let Some(answer) = self.prompt("Do you want to perform an activity? (Y/N): ")? else {
                return Ok(());
            };
            match answer.trim() {
                "Y" | "y" => {
                    let Some(choice) = self.prompt_number::<usize>(ACTIVITY_MENU)? else {
                        if self.closed {
                            return Ok(());
                        }
                        continue;
                    };
                    match choice.checked_sub(1).and_then(|i| Activity::ALL.get(i)) {
                        Some(activity) => {
                            let result = city.participate(index, *activity);
                            self.report(result)?;
                        }
                        None => writeln!(self.output, "Invalid activity choice.")?,
                    }
                }
                "N" | "n" => return Ok(()),
                _ => writeln!(self.output, "Invalid input. Please enter Y or N.")?,
            }
        }
    }

    fn add_power_source(&mut self, city: &mut City) -> io::Result<()> {
        if city.power_sources().is_full() {
            return writeln!(self.output, "Power source limit reached.");
        }
        let Some(name) = self.prompt("Power Source Name: ")? else {
            return Ok(());
        };
        let Some(kind) = self.prompt_number::<u32>("Type (1. Solar, 2. Coal): ")? else {
            return Ok(());
        };
        let kind = if kind == 1 {
            PowerSourceKind::Solar
        } else {
            PowerSourceKind::Coal
        };
        let result = city.add_power_source(name, kind);
        self.report(result)
    }

    fn upgrade_building(&mut self, city: &mut City) -> io::Result<()> {
        let count = city.buildings().len();
        if count == 0 {
            return writeln!(self.output, "No buildings.");
        }
        let Some(index) =
            self.prompt_number::<usize>(&format!("Choose building (0 to {}): ", count - 1))?
        else {
            return Ok(());
        };
        let Some(budget) = self.prompt_number::<i64>("Enter budget: ")? else {
            return Ok(());
        };
        let result = city.upgrade_building(index, budget);
        self.report(result)
    }

    fn add_car(&mut self, city: &mut City) -> io::Result<()> {
        if city.transports().is_full() {
            return writeln!(self.output, "Transport limit reached.");
        }
        let Some(name) = self.prompt("Enter Car Name: ")? else {
            return Ok(());
        };
        let Some(distance) = self.prompt_number::<i64>("Enter distance travelled in KM: ")? else {
            return Ok(());
        };
        let result = city.add_car_and_drive(name, distance);
        self.report(result)
    }

    // ── Input / output helpers ──────────────────────────────────────────

    /// Print `text`, then read one line. `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`Self::prompt`] but parses the answer. An unparsable answer
    /// is reported and yields `None` without closing the menu.
    fn prompt_number<T: FromStr>(&mut self, text: &str) -> io::Result<Option<T>> {
        let Some(answer) = self.prompt(text)? else {
            return Ok(None);
        };
        match answer.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid number.")?;
                Ok(None)
            }
        }
    }

    fn print_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn report(&mut self, result: Result<Vec<String>, CityError>) -> io::Result<()> {
        match result {
            Ok(lines) => self.print_lines(&lines),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }
}
