//! The coarse stages of the boot sequence.
//!
//! Phases are totally ordered and fixed at design time; every slot in the
//! init plan belongs to exactly one of them. The order below is the order
//! they execute in.

use bitflags::bitflags;

/// A named boot stage with a fixed position in the global order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Timers, RNG, scheduler statistics, event threads.
    CoreServices = 0,
    /// Packet buffers, IP stacks, transport protocols, USB stack.
    NetworkTransport = 1,
    /// Network interface drivers, plus the helpers that need them up.
    NetworkDevices = 2,
    /// Sensor and actuator drivers, including SAUL registration.
    SensorsActuators = 3,
    /// Filesystems and block devices.
    Storage = 4,
    /// Secure elements and update-condition setup.
    Security = 5,
    /// Handshakes and clients that want the whole system online.
    LateSync = 6,
}

impl Phase {
    /// Every phase, in execution order.
    pub const ALL: [Phase; 7] = [
        Phase::CoreServices,
        Phase::NetworkTransport,
        Phase::NetworkDevices,
        Phase::SensorsActuators,
        Phase::Storage,
        Phase::Security,
        Phase::LateSync,
    ];

    /// Stable label used in logs and traces.
    pub const fn name(self) -> &'static str {
        match self {
            Phase::CoreServices => "core_services",
            Phase::NetworkTransport => "network_transport",
            Phase::NetworkDevices => "network_devices",
            Phase::SensorsActuators => "sensors_actuators",
            Phase::Storage => "storage",
            Phase::Security => "security",
            Phase::LateSync => "late_sync",
        }
    }

    /// Single-bit `PhaseSet` for this phase.
    pub const fn mask(self) -> PhaseSet {
        PhaseSet::from_bits_truncate(1 << self as u8)
    }
}

bitflags! {
    /// Set of phases, used to report which stages ran hooks during boot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PhaseSet: u8 {
        const CORE_SERVICES = 1 << 0;
        const NETWORK_TRANSPORT = 1 << 1;
        const NETWORK_DEVICES = 1 << 2;
        const SENSORS_ACTUATORS = 1 << 3;
        const STORAGE = 1 << 4;
        const SECURITY = 1 << 5;
        const LATE_SYNC = 1 << 6;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_totally_ordered() {
        for pair in Phase::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn masks_are_distinct_single_bits() {
        let mut seen = PhaseSet::empty();
        for phase in Phase::ALL {
            let mask = phase.mask();
            assert_eq!(mask.bits().count_ones(), 1);
            assert!(!seen.intersects(mask));
            seen.insert(mask);
        }
        assert_eq!(seen, PhaseSet::all());
    }
}
