quantity!(
    /// Pound sterling.
    Cost, via: f64, prefix: "£", precision: 2
);
