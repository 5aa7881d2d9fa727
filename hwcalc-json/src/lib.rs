//! hwcalc-json contains the JSON schemas used by hwcalc-httpd.
//!
//! Every calculator is exposed as a GET request whose query string gives the
//! calculator parameters. The response is a [`Calculation`], which echoes the
//! resolved parameters (after defaults and presets have been applied) together
//! with the results.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

macro_rules! impl_str_conv {
    ($ty:ty, $($s:expr => $v:ident),*) => {
        impl std::str::FromStr for $ty {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, ()> {
                Ok(match s {
                    $(
                        $s => <$ty>::$v,
                    )*
                        _ => return Err(()),
                })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                write!(f, "{}", match self {
                    $(
                        <$ty>::$v => $s,
                    )*
                })
            }
        }
    }
}

/// API JSON schema.
///
/// This JSON schema corresponds to GET requests on `/api`. It lists the
/// available calculators and device families.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Api {
    /// Calculators served by the API.
    pub calculators: Vec<CalculatorInfo>,
    /// Device families known to the divider search.
    pub devices: Vec<DeviceSummary>,
}

/// Calculator description.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalculatorInfo {
    /// Calculator identifier, used in the API path `/api/<id>`.
    pub id: String,
    /// Human readable calculator name.
    pub name: String,
}

/// Short description of a device family.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeviceSummary {
    /// Device identifier, used in the `device` query parameter.
    pub id: String,
    /// Human readable device name.
    pub name: String,
    /// Device kind.
    pub kind: DeviceKind,
}

/// Versions JSON schema.
///
/// This JSON schema corresponds to GET requests on `/api/version`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Versions {
    /// Git version of hwcalc-httpd.
    pub hwcalc_httpd_git: String,
    /// Crate version of hwcalc-httpd.
    pub hwcalc_httpd_version: String,
}

/// Error JSON schema.
///
/// This JSON schema is used for the body of every non-successful response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Error {
    /// HTTP status code.
    pub http_status_code: u16,
    /// Error description.
    pub error_description: String,
    /// Structured failure reason, for calculator input errors.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub failure_reason: Option<FailureReason>,
}

/// Reason why a calculation did not produce results.
///
/// These are reported results rather than faults: a calculator that cannot
/// produce results for its inputs returns one of these reasons.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind")]
pub enum FailureReason {
    /// An input is missing, non-numeric, non-finite or out of its domain.
    InvalidInput {
        /// Query parameter name of the offending input.
        field: String,
        /// What is wrong with the input.
        message: String,
    },
    /// The target lies outside the absolute range of the device.
    TargetOutOfDeviceRange {
        /// Device identifier.
        device: String,
        /// Requested target.
        requested: f64,
        /// Minimum of the device range (inclusive).
        min: f64,
        /// Maximum of the device range (inclusive).
        max: f64,
        /// Side of the range on which the target lies.
        direction: RangeDirection,
    },
    /// The search completed without finding any configuration.
    ///
    /// The warnings collected during the search are given in
    /// [`SearchResults::warnings`].
    NoConfigurationFound,
}

impl FailureReason {
    /// Creates an [`FailureReason::InvalidInput`].
    pub fn invalid_input(field: &str, message: impl Into<String>) -> FailureReason {
        FailureReason::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            FailureReason::InvalidInput { field, message } => {
                write!(f, "invalid {field}: {message}")
            }
            FailureReason::TargetOutOfDeviceRange {
                device,
                requested,
                min,
                max,
                direction,
            } => write!(
                f,
                "{requested} is {direction} for {device} (valid range {min} - {max})"
            ),
            FailureReason::NoConfigurationFound => write!(f, "no valid configuration found"),
        }
    }
}

impl std::error::Error for FailureReason {}

/// Side of a range on which a value lies.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RangeDirection {
    /// The value is below the minimum.
    BelowMinimum,
    /// The value is above the maximum.
    AboveMaximum,
}

impl_str_conv!(RangeDirection,
               "below the minimum" => BelowMinimum,
               "above the maximum" => AboveMaximum);

/// Calculation JSON schema.
///
/// Every calculator returns its resolved parameters together with its
/// results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Calculation<P, R> {
    /// Parameters used in the calculation.
    pub parameters: P,
    /// Calculation results.
    pub results: R,
}

/// Kind of device family.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DeviceKind {
    /// Transceiver (SerDes) PLLs. Targets are line rates in Gbps.
    Serdes,
    /// Fabric PLL or MMCM primitives. Targets are frequencies in MHz.
    Pll,
}

impl_str_conv!(DeviceKind,
               "SerDes" => Serdes,
               "PLL" => Pll);

/// Frequency unit used by a device family for VCO and output frequencies.
///
/// Reference clocks are always given in MHz.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FrequencyUnit {
    /// Megahertz.
    MHz,
    /// Gigahertz. Line rates are given in Gbps.
    GHz,
}

impl_str_conv!(FrequencyUnit,
               "MHz" => MHz,
               "GHz" => GHz);

/// Closed range of real values.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Range {
    /// Minimum value (inclusive).
    pub min: f64,
    /// Maximum value (inclusive).
    pub max: f64,
}

/// Set of allowed integer values for a divider or multiplier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ValueSet {
    /// Explicit list of values.
    List(Vec<u32>),
    /// All the integers in a closed range.
    Range {
        /// Minimum value (inclusive).
        min: u32,
        /// Maximum value (inclusive).
        max: u32,
    },
}

/// Device family JSON schema.
///
/// This JSON schema corresponds to the elements of GET requests on
/// `/api/devices`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Device {
    /// Device identifier.
    pub id: String,
    /// Human readable device name.
    pub name: String,
    /// Device kind.
    pub kind: DeviceKind,
    /// Unit of VCO and output frequencies.
    pub unit: FrequencyUnit,
    /// Absolute output range of the device.
    pub output_range: Range,
    /// Frequency synthesis topologies of the device.
    pub topologies: Vec<Topology>,
}

/// Frequency synthesis topology JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Topology {
    /// Topology name.
    pub name: String,
    /// Valid reference clock range in MHz, if constrained.
    pub reference_clock_range: Option<Range>,
    /// Valid VCO bands.
    pub vco_bands: Vec<Range>,
    /// Allowed multiplier (feedback divider) values.
    pub multipliers: ValueSet,
    /// Allowed reference divider values.
    pub divisors: ValueSet,
    /// Allowed output divider values.
    pub output_dividers: ValueSet,
    /// Output scale factor relative to the VCO (1, 2 for DDR, 4 for PAM4).
    pub scale: u32,
    /// Output sub-range of this topology, if narrower than the device range.
    pub output_range: Option<Range>,
    /// Recommended phase-frequency detector range in MHz, if any.
    pub pfd_range: Option<Range>,
}

/// Divider search parameters.
///
/// These correspond to the query string of GET requests on `/api/search`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchParameters {
    /// Target output frequency or line rate, in the device unit.
    pub target: f64,
    /// Reference clock in MHz.
    pub refclk_mhz: f64,
    /// Device identifier.
    pub device: Option<String>,
}

/// Custom PLL search parameters.
///
/// These correspond to the query string of GET requests on `/api/pll`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PllParameters {
    /// Input clock in MHz.
    pub fin_mhz: f64,
    /// Target output clock in MHz.
    pub fout_mhz: f64,
    /// Minimum VCO frequency in MHz.
    pub vco_min_mhz: f64,
    /// Maximum VCO frequency in MHz.
    pub vco_max_mhz: f64,
    /// Maximum multiplier M.
    pub m_max: u32,
    /// Maximum input divider D.
    pub d_max: u32,
    /// Maximum output divider O.
    pub o_max: u32,
}

/// Divider search results JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResults {
    /// Unit of VCO and output frequencies in the candidates.
    pub unit: FrequencyUnit,
    /// Best candidates, lowest error first.
    pub candidates: Vec<Candidate>,
    /// Total number of candidates found before truncation.
    pub total_found: u32,
    /// Warnings collected during the search.
    pub warnings: Vec<String>,
    /// Reason why no candidates were returned.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub failure_reason: Option<FailureReason>,
}

/// Divider search candidate JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Topology name.
    pub topology: String,
    /// Multiplier (feedback divider) value.
    pub multiplier: u32,
    /// Reference divider value.
    pub divisor: u32,
    /// Output divider value.
    pub output_divider: u32,
    /// VCO frequency.
    pub vco: f64,
    /// Output frequency or line rate.
    pub output: f64,
    /// Absolute error with respect to the target in ppm.
    pub error_ppm: f64,
    /// Signed offset with respect to the target in ppm.
    pub offset_ppm: f64,
    /// The candidate is an exact match.
    pub exact: bool,
    /// Phase-frequency detector input, for topologies with a recommended
    /// PFD range.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pfd: Option<Pfd>,
}

/// Phase-frequency detector input.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Pfd {
    /// PFD frequency in MHz.
    pub frequency_mhz: f64,
    /// The PFD frequency is within the recommended range.
    pub valid: bool,
}

/// FIFO depth parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FifoParameters {
    /// Write clock in MHz.
    pub write_clock_mhz: f64,
    /// Read clock in MHz.
    pub read_clock_mhz: f64,
    /// Burst length in words.
    pub burst_length: u32,
    /// Read latency in cycles.
    pub read_latency: u32,
}

/// FIFO depth results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FifoResults {
    /// Minimum depth in words.
    pub minimum_depth: u64,
    /// Minimum depth rounded up to a power of two.
    pub power_of_two_depth: u64,
}

/// CDC MTBF parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CdcParameters {
    /// Data (toggle) clock in MHz.
    pub data_clock_mhz: f64,
    /// Sampling clock in MHz.
    pub sample_clock_mhz: f64,
    /// Metastability window in ps.
    pub window_ps: f64,
    /// Metastability resolution time constant in ps.
    pub tau_ps: f64,
    /// Number of synchronizer stages.
    pub stages: u32,
    /// Flip-flop setup time in ns.
    pub setup_ns: f64,
    /// Routing delay between stages in ns.
    pub routing_ns: f64,
}

/// CDC MTBF results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CdcResults {
    /// Total resolution time in ns.
    pub resolution_time_ns: f64,
    /// MTBF in seconds.
    pub mtbf_seconds: f64,
    /// MTBF in years.
    pub mtbf_years: f64,
    /// MTBF formatted with a human readable unit.
    pub mtbf_display: String,
    /// Synchronizer recommendation.
    pub recommendation: CdcRecommendation,
}

/// Synchronizer recommendation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CdcRecommendation {
    /// The MTBF is at least 1000 years with this number of stages.
    StagesOk(u32),
    /// The MTBF is at least one year; consider this number of stages.
    ConsiderStages(u32),
    /// The MTBF is below one year.
    AddMoreStages,
}

impl std::fmt::Display for CdcRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            CdcRecommendation::StagesOk(n) => write!(f, "{n} stages OK"),
            CdcRecommendation::ConsiderStages(n) => write!(f, "Consider {n} stages"),
            CdcRecommendation::AddMoreStages => write!(f, "Add more stages!"),
        }
    }
}

/// Timing budget parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimingParameters {
    /// Clock frequency in MHz.
    pub frequency_mhz: f64,
    /// Setup time in ns.
    pub setup_ns: f64,
    /// Clock uncertainty in ns.
    pub uncertainty_ns: f64,
    /// Clock-to-Q delay in ns.
    pub clock_to_q_ns: f64,
    /// LUT plus routing delay per logic level in ns.
    pub lut_delay_ns: f64,
}

/// Timing budget results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimingResults {
    /// Clock period in ns.
    pub period_ns: f64,
    /// Time available for logic in ns. Negative values mean negative slack.
    pub available_ns: f64,
    /// The budget has negative (or zero) slack.
    pub negative_slack: bool,
    /// Estimated number of logic levels, if a LUT delay was given.
    pub logic_levels: Option<u32>,
}

/// Fixed-point sizing parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FixedPointParameters {
    /// Minimum value to represent.
    pub min: f64,
    /// Maximum value to represent.
    pub max: f64,
    /// Required precision (maximum LSB weight).
    pub precision: f64,
    /// Use a signed (two's complement) format.
    pub signed: bool,
}

/// Fixed-point sizing results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FixedPointResults {
    /// Integer bits, including the sign bit for signed formats.
    pub integer_bits: u32,
    /// Fractional bits. Negative when the precision is coarser than 1.
    pub fractional_bits: i32,
    /// Total width in bits.
    pub total_bits: i32,
    /// Q notation of the format.
    pub q_notation: String,
    /// Smallest representable value.
    pub actual_min: f64,
    /// Largest representable value.
    pub actual_max: f64,
    /// LSB weight.
    pub actual_precision: f64,
}

/// DDR memory generation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DdrGeneration {
    /// DDR3.
    Ddr3,
    /// DDR4.
    Ddr4,
    /// DDR5.
    Ddr5,
    /// LPDDR4.
    Lpddr4,
    /// LPDDR5.
    Lpddr5,
}

impl_str_conv!(DdrGeneration,
               "ddr3" => Ddr3,
               "ddr4" => Ddr4,
               "ddr5" => Ddr5,
               "lpddr4" => Lpddr4,
               "lpddr5" => Lpddr5);

/// Memory controller class.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ControllerType {
    /// Basic FPGA soft controller.
    FpgaBasic,
    /// FPGA controller with reordering enabled.
    FpgaOptimized,
    /// Desktop CPU controller.
    Desktop,
    /// Server CPU controller.
    Server,
}

impl_str_conv!(ControllerType,
               "fpgaBasic" => FpgaBasic,
               "fpgaOptimized" => FpgaOptimized,
               "desktop" => Desktop,
               "server" => Server);

/// Memory bandwidth parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MemBwParameters {
    /// DDR generation.
    pub generation: DdrGeneration,
    /// Data rate in MT/s.
    pub data_rate_mts: f64,
    /// Bus width in bits.
    pub bus_width_bits: u32,
    /// Number of ranks.
    pub ranks: u32,
    /// Burst length. The generation default is used if not given.
    pub burst_length: Option<u32>,
    /// Page hit rate in percent.
    pub page_hit_percent: f64,
    /// Read ratio in percent.
    pub read_percent: f64,
    /// Memory controller class.
    pub controller: ControllerType,
    /// Refresh cycle time in ns. The generation default is used if not given.
    pub trfc_ns: Option<f64>,
    /// Refresh interval in ns. The generation default is used if not given.
    pub trefi_ns: Option<f64>,
}

/// Memory bandwidth results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MemBwResults {
    /// Peak bandwidth in GB/s.
    pub peak_bandwidth_gbs: f64,
    /// Effective bandwidth in GB/s.
    pub effective_bandwidth_gbs: f64,
    /// Efficiency before the controller adjustment.
    pub raw_efficiency: f64,
    /// Final efficiency, between 0.15 and 0.95.
    pub efficiency: f64,
    /// Efficiency breakdown.
    pub breakdown: Vec<BreakdownItem>,
    /// Data per burst in bytes.
    pub data_per_burst_bytes: f64,
    /// Burst duration in ns.
    pub burst_time_ns: f64,
    /// Peak transactions per second.
    pub peak_transactions_per_second: f64,
    /// Effective transactions per second.
    pub effective_transactions_per_second: f64,
    /// Efficiency rating.
    pub rating: EfficiencyRating,
    /// Largest efficiency loss, if any.
    pub bottleneck: Option<EfficiencyFactor>,
    /// Input validation issues.
    pub validation: Vec<ValidationIssue>,
}

/// Row of the efficiency breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BreakdownItem {
    /// Efficiency factor.
    pub factor: EfficiencyFactor,
    /// Contribution in percentage points (or the subtotal/total in percent).
    pub value_percent: f64,
    /// Explanatory note.
    pub note: String,
    /// Kind of row.
    pub kind: BreakdownKind,
}

/// Kind of breakdown row.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BreakdownKind {
    /// A term that adds to or subtracts from the efficiency.
    Term,
    /// Subtotal before the controller adjustment.
    Subtotal,
    /// Final efficiency.
    Final,
}

/// Efficiency factors of the memory bandwidth model.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EfficiencyFactor {
    /// Base efficiency.
    Base,
    /// Page miss penalty.
    PageMiss,
    /// Read/write turnaround penalty.
    Turnaround,
    /// Refresh overhead.
    Refresh,
    /// DDR generation bonus.
    Generation,
    /// Rank interleaving bonus.
    RankInterleaving,
    /// Efficiency before the controller adjustment.
    RawEfficiency,
    /// Controller quality adjustment.
    Controller,
    /// Final efficiency.
    FinalEfficiency,
}

impl_str_conv!(EfficiencyFactor,
               "Base Efficiency" => Base,
               "Page Miss Penalty" => PageMiss,
               "R/W Turnaround Penalty" => Turnaround,
               "Refresh Overhead" => Refresh,
               "DDR Generation" => Generation,
               "Rank Interleaving" => RankInterleaving,
               "Raw Efficiency" => RawEfficiency,
               "Controller Quality" => Controller,
               "Final Efficiency" => FinalEfficiency);

/// Efficiency rating.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EfficiencyRating {
    /// At least 80 %.
    Excellent,
    /// At least 65 %.
    Good,
    /// At least 50 %.
    Moderate,
    /// Below 50 %.
    Low,
}

impl_str_conv!(EfficiencyRating,
               "Excellent" => Excellent,
               "Good" => Good,
               "Moderate" => Moderate,
               "Low" => Low);

/// Input validation issue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationIssue {
    /// Query parameter name of the input.
    pub field: String,
    /// Description of the issue.
    pub message: String,
    /// Severity of the issue.
    pub severity: Severity,
}

/// Severity of a validation issue.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Severity {
    /// The input is outside its valid domain.
    Error,
    /// The input is unusual but valid.
    Warning,
}

/// Presets JSON schema.
///
/// This JSON schema corresponds to GET requests on `/api/presets`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Presets {
    /// CDC MTBF device presets.
    pub cdc: Vec<CdcPreset>,
    /// Timing budget device presets.
    pub timing: Vec<TimingPreset>,
    /// PLL/MMCM device presets.
    pub pll: Vec<PllPreset>,
    /// Memory workload presets.
    pub workloads: Vec<WorkloadPreset>,
}

/// CDC MTBF device preset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CdcPreset {
    /// Preset identifier.
    pub id: String,
    /// Device name.
    pub name: String,
    /// Metastability window in ps.
    pub window_ps: f64,
    /// Resolution time constant in ps.
    pub tau_ps: f64,
    /// Setup time in ns.
    pub setup_ns: f64,
}

/// Timing budget device preset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimingPreset {
    /// Preset identifier.
    pub id: String,
    /// Device name.
    pub name: String,
    /// Setup time in ns.
    pub setup_ns: f64,
    /// Clock uncertainty in ns.
    pub uncertainty_ns: f64,
    /// Clock-to-Q delay in ns.
    pub clock_to_q_ns: f64,
    /// LUT plus routing delay in ns.
    pub lut_delay_ns: f64,
}

/// PLL/MMCM device preset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PllPreset {
    /// Preset identifier. This is also a device identifier for `/api/search`.
    pub id: String,
    /// Device name.
    pub name: String,
    /// Minimum VCO frequency in MHz.
    pub vco_min_mhz: f64,
    /// Maximum VCO frequency in MHz.
    pub vco_max_mhz: f64,
    /// Maximum multiplier M.
    pub m_max: u32,
    /// Maximum input divider D.
    pub d_max: u32,
    /// Maximum output divider O.
    pub o_max: u32,
}

/// Memory workload preset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkloadPreset {
    /// Preset identifier.
    pub id: String,
    /// Workload name.
    pub name: String,
    /// Page hit rate in percent.
    pub page_hit_percent: f64,
    /// Read ratio in percent.
    pub read_percent: f64,
    /// Memory controller class.
    pub controller: ControllerType,
    /// Workload description.
    pub description: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn candidate(pfd: Option<Pfd>) -> Candidate {
        Candidate {
            topology: "PLL M/D/O".to_string(),
            multiplier: 6,
            divisor: 1,
            output_divider: 4,
            vco: 600.0,
            output: 150.0,
            error_ppm: 0.0,
            offset_ppm: 0.0,
            exact: true,
            pfd,
        }
    }

    #[test]
    fn failure_reason_is_tagged() {
        assert_eq!(
            serde_json::to_value(FailureReason::NoConfigurationFound).unwrap(),
            json!({ "kind": "NoConfigurationFound" })
        );
        assert_eq!(
            serde_json::to_value(FailureReason::invalid_input("fwrite", "must be a positive number"))
                .unwrap(),
            json!({
                "kind": "InvalidInput",
                "field": "fwrite",
                "message": "must be a positive number",
            })
        );
        let reason = FailureReason::TargetOutOfDeviceRange {
            device: "gtx".to_string(),
            requested: 20.0,
            min: 0.5,
            max: 12.5,
            direction: RangeDirection::AboveMaximum,
        };
        let value = serde_json::to_value(&reason).unwrap();
        assert_eq!(value["kind"], "TargetOutOfDeviceRange");
        assert_eq!(value["direction"], "AboveMaximum");
        assert_eq!(serde_json::from_value::<FailureReason>(value).unwrap(), reason);
    }

    #[test]
    fn optional_fields_omitted() {
        let results = SearchResults {
            unit: FrequencyUnit::MHz,
            candidates: vec![candidate(None)],
            total_found: 1,
            warnings: Vec::new(),
            failure_reason: None,
        };
        let value = serde_json::to_value(&results).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("failure_reason"));
        assert!(!value["candidates"][0]
            .as_object()
            .unwrap()
            .contains_key("pfd"));
        assert_eq!(value["unit"], "MHz");

        let value = serde_json::to_value(candidate(Some(Pfd {
            frequency_mhz: 100.0,
            valid: true,
        })))
        .unwrap();
        assert_eq!(value["pfd"], json!({ "frequency_mhz": 100.0, "valid": true }));

        let error = Error {
            http_status_code: 404,
            error_description: "device gtz not found".to_string(),
            failure_reason: None,
        };
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({ "http_status_code": 404, "error_description": "device gtz not found" })
        );
    }

    #[test]
    fn infinite_mtbf_is_null() {
        let results = CdcResults {
            resolution_time_ns: 15.2,
            mtbf_seconds: f64::INFINITY,
            mtbf_years: f64::INFINITY,
            mtbf_display: "inf years".to_string(),
            recommendation: CdcRecommendation::StagesOk(2),
        };
        let value = serde_json::to_value(&results).unwrap();
        assert!(value["mtbf_seconds"].is_null());
        assert!(value["mtbf_years"].is_null());
        assert_eq!(value["recommendation"], json!({ "StagesOk": 2 }));
    }
}
