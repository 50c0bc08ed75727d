/// Per-unit characteristics of one cabinet module type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ModuleSpec {
    pub kw: f64,
    pub ru: u32,
    pub ports: u32,
    pub nfs_write_gbps: f64,
    pub nfs_read_gbps: f64,
    pub s3_write_gbps: f64,
    pub s3_read_gbps: f64,
}

/// Compute module (C-unit).
pub(crate) const C_UNIT: ModuleSpec = ModuleSpec {
    kw: 0.5,
    ru: 1,
    ports: 2,
    nfs_write_gbps: 6.0,
    nfs_read_gbps: 29.0,
    s3_write_gbps: 5.0,
    s3_read_gbps: 13.2,
};

/// Storage module (D-unit). Contributes all of the usable capacity.
pub(crate) const D_UNIT: ModuleSpec = ModuleSpec {
    kw: 0.75,
    ru: 1,
    ports: 4,
    nfs_write_gbps: 12.7,
    nfs_read_gbps: 51.0,
    s3_write_gbps: 12.7,
    s3_read_gbps: 51.0,
};

/// Rack units taken by the networking switches, regardless of unit counts.
pub(crate) const FIXED_RU: u32 = 4;

/// Power drawn by the networking switches, regardless of unit counts.
pub(crate) const FIXED_KW: f64 = 2.0;

/// Ports available on the network fabric.
pub(crate) const MAX_FABRIC_PORTS: u32 = 128;

/// Usable power never exceeds this share of cabinet power, whatever the user asks for.
pub(crate) const POWER_SAFETY_CAP_PERCENT: f64 = 90.0;

/// Smallest C-unit count the search considers.
pub(crate) const MIN_C_UNITS: u32 = 2;

/// Smallest D-unit count the search considers.
pub(crate) const MIN_D_UNITS: u32 = 1;
