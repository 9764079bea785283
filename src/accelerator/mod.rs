pub mod simulation;

pub const NUM_COMPONENTS: usize = 8;
pub const DEFAULT_PARTICLE_ENERGY: f64 = 10.0;
pub const DEFAULT_PARTICLE_TYPE: &str = "Sand";
pub const COMPONENT_PLACEHOLDER_NAME: &str = "Component";
pub const MAX_PARTICLE_TYPE_LEN: usize = 49;

/// One accelerator section. All quantities start at zero and only move
/// through simulation drift.
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    pub name: String,
    pub energy: f64,          // GeV
    pub beam_intensity: f64,  // particles/s
    pub beam_size: f64,       // mm
    pub vacuum_pressure: f64, // Torr
    pub magnetic_field: f64,  // Tesla
    pub radio_frequency: f64, // MHz
    pub beam_power: f64,      // kW
    pub cooling_flow: f64,    // liters/min
}

impl Component {
    pub fn new() -> Self {
        Self {
            name: COMPONENT_PLACEHOLDER_NAME.to_string(),
            energy: 0.0,
            beam_intensity: 0.0,
            beam_size: 0.0,
            vacuum_pressure: 0.0,
            magnetic_field: 0.0,
            radio_frequency: 0.0,
            beam_power: 0.0,
            cooling_flow: 0.0,
        }
    }

    /// The eight simulated quantities, in drift order.
    #[cfg(test)]
    pub fn quantities(&self) -> [f64; 8] {
        [
            self.energy,
            self.beam_intensity,
            self.beam_size,
            self.vacuum_pressure,
            self.magnetic_field,
            self.radio_frequency,
            self.beam_power,
            self.cooling_flow,
        ]
    }

    pub fn quantities_mut(&mut self) -> [&mut f64; 8] {
        [
            &mut self.energy,
            &mut self.beam_intensity,
            &mut self.beam_size,
            &mut self.vacuum_pressure,
            &mut self.magnetic_field,
            &mut self.radio_frequency,
            &mut self.beam_power,
            &mut self.cooling_flow,
        ]
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Accelerator {
    pub particle_energy: f64, // GeV
    pub particle_type: String,
    pub components: [Component; NUM_COMPONENTS],
}

impl Accelerator {
    pub fn new() -> Self {
        Self {
            particle_energy: DEFAULT_PARTICLE_ENERGY,
            particle_type: DEFAULT_PARTICLE_TYPE.to_string(),
            components: std::array::from_fn(|_| Component::new()),
        }
    }

    /// Overwrite the particle energy and type. Components are left alone.
    pub fn change_particle(&mut self, energy: f64, particle_type: &str) {
        self.particle_energy = energy;
        self.particle_type = particle_type.chars().take(MAX_PARTICLE_TYPE_LEN).collect();

        if self.particle_type == DEFAULT_PARTICLE_TYPE {
            // Sand needs no component adjustments yet.
        }
    }

    /// Component 0 stands in for the whole ring in status reports.
    pub fn common_component(&self) -> &Component {
        &self.components[0]
    }
}

impl Default for Accelerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accelerator_has_defaults() {
        let acc = Accelerator::new();
        assert_eq!(acc.particle_energy, 10.0);
        assert_eq!(acc.particle_type, "Sand");
        assert_eq!(acc.components.len(), 8);
        for component in &acc.components {
            assert_eq!(component.name, "Component");
            assert!(component.quantities().iter().all(|&q| q == 0.0));
        }
    }

    #[test]
    fn change_particle_overwrites_energy_and_type() {
        let mut acc = Accelerator::new();
        acc.components[3].beam_power = 1.5;
        let before = acc.components.clone();

        acc.change_particle(42.5, "Proton");

        assert_eq!(acc.particle_energy, 42.5);
        assert_eq!(acc.particle_type, "Proton");
        assert_eq!(acc.components, before);
    }

    #[test]
    fn change_particle_accepts_any_energy() {
        let mut acc = Accelerator::new();
        acc.change_particle(-3.0, "Sand");
        assert_eq!(acc.particle_energy, -3.0);
        assert_eq!(acc.particle_type, "Sand");

        acc.change_particle(f64::INFINITY, "Muon");
        assert!(acc.particle_energy.is_infinite());
    }

    #[test]
    fn long_particle_type_is_truncated() {
        let mut acc = Accelerator::new();
        let long = "X".repeat(80);
        acc.change_particle(1.0, &long);
        assert_eq!(acc.particle_type.chars().count(), MAX_PARTICLE_TYPE_LEN);
    }

    #[test]
    fn common_component_is_index_zero() {
        let mut acc = Accelerator::new();
        acc.components[0].energy = 0.5;
        acc.components[1].energy = 9.0;
        assert_eq!(acc.common_component().energy, 0.5);
    }
}
