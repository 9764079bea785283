use ratatui::prelude::*;

use crate::accelerator::Accelerator;
use crate::app::Command;

pub const TITLE: &str = "Air Pressurized Particle Accelerator Simulator (APPAs)";

const APPA: [&str; 7] = [
    r"     ___      ___       ___        ",
    r"    /   \    /   \     /   \       ",
    r"   |     |  |     |   |     |      ",
    r"    \___/    \___/     \___/       ",
    r"    ============================  ",
    r"    |           APPA           |  ",
    r"    ============================  ",
];

const HEADING: Color = Color::Rgb(255, 220, 80);
const LABEL: Color = Color::Rgb(120, 200, 255);
const VALUE: Color = Color::Rgb(255, 255, 255);
const UNIT: Color = Color::Rgb(120, 120, 140);
const RING: Color = Color::Rgb(200, 120, 255);

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(HEADING).add_modifier(Modifier::BOLD),
    ))
}

fn reading(label: &'static str, value: String, unit: &'static str) -> Line<'static> {
    let mut spans = vec![
        Span::styled(label, Style::default().fg(LABEL)),
        Span::styled(value, Style::default().fg(VALUE).add_modifier(Modifier::BOLD)),
    ];
    if !unit.is_empty() {
        spans.push(Span::styled(format!(" {}", unit), Style::default().fg(UNIT)));
    }
    Line::from(spans)
}

pub fn title_lines() -> Vec<Line<'static>> {
    vec![heading(TITLE)]
}

/// Full status report. Component properties come from component 0 only.
pub fn status_lines(acc: &Accelerator) -> Vec<Line<'static>> {
    let common = acc.common_component();
    let mut lines = vec![
        heading("Accelerator Status:"),
        reading("Particle Energy: ", format!("{:.2}", acc.particle_energy), "GeV"),
        reading("Particle Type: ", acc.particle_type.clone(), ""),
        heading("Common Component Properties:"),
        reading(" - Energy: ", format!("{:.2}", common.energy), "GeV"),
        reading(" - Beam Intensity: ", format!("{:.2}", common.beam_intensity), "particles/s"),
        reading(" - Beam Size: ", format!("{:.2}", common.beam_size), "mm"),
        reading(" - Vacuum Pressure: ", format!("{:.2}", common.vacuum_pressure), "Torr"),
        reading(" - Magnetic Field: ", format!("{:.2}", common.magnetic_field), "Tesla"),
        reading(" - RF Frequency: ", format!("{:.2}", common.radio_frequency), "MHz"),
        reading(" - Beam Power: ", format!("{:.2}", common.beam_power), "kW"),
        reading(" - Cooling System Flow: ", format!("{:.2}", common.cooling_flow), "liters/min"),
    ];
    lines.extend(appa_lines());
    lines
}

fn appa_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    lines.extend(APPA.iter().map(|row| {
        let style = if row.contains("APPA") {
            Style::default().fg(HEADING).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(RING)
        };
        Line::from(Span::styled(*row, style))
    }));
    lines.push(Line::from(""));
    lines
}

pub fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading("Available commands:")];
    lines.extend(Command::all().iter().map(|cmd| {
        Line::from(vec![
            Span::styled(" - ", Style::default().fg(UNIT)),
            Span::styled(cmd.name(), Style::default().fg(LABEL).add_modifier(Modifier::BOLD)),
        ])
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::plain_text;

    #[test]
    fn default_status_report() {
        let text = plain_text(&status_lines(&Accelerator::new()));
        assert!(text.starts_with("Accelerator Status:\nParticle Energy: 10.00 GeV\nParticle Type: Sand\n"));
        assert!(text.contains("Common Component Properties:\n - Energy: 0.00 GeV\n"));
        assert!(text.contains(" - Cooling System Flow: 0.00 liters/min\n"));
        assert!(text.contains("\n     ___      ___       ___        \n"));
        assert!(text.ends_with("    |           APPA           |  \n    ============================  \n\n"));
    }

    #[test]
    fn reports_component_zero_only() {
        let mut acc = Accelerator::new();
        acc.components[0].beam_power = 1.25;
        for component in acc.components.iter_mut().skip(1) {
            component.beam_power = 99.0;
        }
        let text = plain_text(&status_lines(&acc));
        assert!(text.contains(" - Beam Power: 1.25 kW"));
        assert!(!text.contains("99.00"));
    }

    #[test]
    fn help_lists_every_command() {
        let text = plain_text(&help_lines());
        assert_eq!(
            text,
            "Available commands:\n - exit\n - changeEnergy\n - simulate\n - status\n - help\n"
        );
    }
}
