// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end thermostat behaviour on simulated pins.

use climate_outputs::Thermostat;
use climate_outputs::channel::SimulatedPin;
use climate_outputs::config::ThermostatSettings;
use climate_outputs::control::{Action, ControlMode};
use climate_outputs::state::{ChangeSource, StateChange};
use climate_outputs::types::{ActiveLevel, Level, OutputState};

fn heater() -> Thermostat<SimulatedPin> {
    Thermostat::new(SimulatedPin::new(), ActiveLevel::High)
}

fn sweep(
    thermostat: &mut Thermostat<SimulatedPin>,
    mode: ControlMode,
    values: &[f32],
) -> Vec<bool> {
    values
        .iter()
        .map(|&current| {
            thermostat.set_current(current);
            thermostat.run(mode);
            thermostat.state()
        })
        .collect()
}

// ============================================================================
// Hysteresis
// ============================================================================

mod hysteresis {
    use super::*;

    #[test]
    fn rising_sweep_only_flips_at_edges() {
        let mut thermostat = heater();
        let states = sweep(&mut thermostat, ControlMode::Min, &[5.0, 5.0, 6.0, 6.9, 7.0]);
        assert_eq!(states, [true, true, true, true, false]);
    }

    #[test]
    fn sweep_through_upper_edge_and_back() {
        let mut thermostat = heater();
        let states = sweep(&mut thermostat, ControlMode::Min, &[5.0, 5.0, 7.0, 6.0, 6.9, 7.0]);
        assert_eq!(states, [true, true, false, false, false, false]);
    }

    #[test]
    fn direction_of_travel_does_not_matter_inside_band() {
        let mut thermostat = heater();
        // Enter the band from below: on
        let from_below = sweep(&mut thermostat, ControlMode::Min, &[4.0, 6.0, 5.5, 6.5]);
        assert_eq!(from_below, [true, true, true, true]);

        // Enter the band from above: off
        let from_above = sweep(&mut thermostat, ControlMode::Min, &[8.0, 6.0, 6.5, 5.5]);
        assert_eq!(from_above, [false, false, false, false]);
    }

    #[test]
    fn zero_deadband_still_switches_at_setpoint() {
        let settings = ThermostatSettings::default().with_hysteresis(0.0);
        let mut thermostat = Thermostat::with_settings(SimulatedPin::new(), &settings).unwrap();
        // current == min satisfies both edges; the release edge wins
        let states = sweep(&mut thermostat, ControlMode::Min, &[4.0, 5.0, 4.9]);
        assert_eq!(states, [true, false, true]);
    }
}

// ============================================================================
// Polarity and modes
// ============================================================================

mod polarity {
    use super::*;

    #[test]
    fn cooler_inverts_max_band() {
        let mut heat = heater();
        let mut cool =
            Thermostat::with_settings(SimulatedPin::new(), &ThermostatSettings::cooler("ac"))
                .unwrap();
        heat.set_command(true);
        cool.set_command(true);

        assert_eq!(sweep(&mut heat, ControlMode::Max, &[10.0, 7.9]), [false, true]);
        assert_eq!(sweep(&mut cool, ControlMode::Max, &[10.0, 7.9]), [true, false]);
    }

    #[test]
    fn active_low_heater_drives_pin_low_when_on() {
        let mut thermostat = Thermostat::new(SimulatedPin::new(), ActiveLevel::Low);
        assert_eq!(thermostat.channel().level(), Level::High);

        thermostat.set_current(1.0);
        assert_eq!(thermostat.run_min(), Action::Engage);
        assert_eq!(thermostat.channel().level(), Level::Low);
        assert_eq!(thermostat.output_state(), OutputState::On);
    }

    #[test]
    fn mode_guards_leave_output_alone() {
        let mut thermostat = heater();
        thermostat.on();

        thermostat.set_command(true);
        thermostat.set_current(100.0);
        assert_eq!(thermostat.run_min(), Action::Hold);
        assert!(thermostat.state());

        thermostat.set_command(false);
        assert_eq!(thermostat.run_max(), Action::Hold);
        assert!(thermostat.state());
    }

    #[test]
    fn switching_command_changes_band() {
        let mut thermostat = heater();
        thermostat.set_max(20.0);

        // Minimum band: 6.0 sits inside the deadband, output stays off
        assert_eq!(sweep(&mut thermostat, ControlMode::MinMax, &[6.0]), [false]);

        // Hard bounds: engage at min, hold up to max
        thermostat.set_min(6.0);
        thermostat.set_command(true);
        let states = sweep(&mut thermostat, ControlMode::MinMax, &[6.0, 15.0, 20.0, 15.0]);
        assert_eq!(states, [true, true, false, false]);
    }
}

// ============================================================================
// Publishing loop
// ============================================================================

mod publishing {
    use super::*;

    #[test]
    fn nothing_to_publish_after_construction() {
        let mut thermostat = heater();
        assert!(!thermostat.command_changed());
        assert!(!thermostat.state_changed());
        assert!(!thermostat.current_changed());
        assert!(!thermostat.min_changed());
        assert!(!thermostat.max_changed());
        assert!(!thermostat.hyst_changed());
    }

    #[test]
    fn noisy_measurement_is_published_once_per_significant_move() {
        let mut thermostat = heater();
        let mut published = Vec::new();
        for current in [0.0, 0.25, 0.5, 0.75, 1.0, 1.25, 1.0] {
            thermostat.set_current(current);
            if thermostat.current_changed() {
                published.push(current);
            }
        }
        assert_eq!(published, [0.5, 1.0]);
    }

    #[test]
    fn changes_serialize_for_publishing() {
        let mut thermostat = heater().with_label("greenhouse");
        thermostat.set_current(4.0);
        thermostat.run_min();

        let changes = thermostat.poll_changes();
        assert_eq!(
            changes,
            [StateChange::State(OutputState::On), StateChange::Current(4.0)]
        );

        let json = serde_json::to_value(&changes).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "field": "state", "value": "ON" },
                { "field": "current", "value": 4.0 }
            ])
        );
        assert_eq!(thermostat.label(), "greenhouse");
    }

    #[test]
    fn settings_round_trip_through_json() {
        let mut thermostat = heater().with_label("loft");
        thermostat.set_min(3.0);
        thermostat.set_cooler(true);

        let json = serde_json::to_string(&thermostat.settings()).unwrap();
        let restored = ThermostatSettings::from_json(&json).unwrap();
        assert_eq!(restored, thermostat.settings());
        assert!(restored.cooler);
        assert_eq!(restored.min, 3.0);
    }
}
