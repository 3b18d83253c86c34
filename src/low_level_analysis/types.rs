//! Defines traits, enums & structs returned / shared by this module's functions.

use std::fmt::{Display, Formatter};
use std::time::Duration;
use crate::utils::measurements::presentable_measurements::{bytes_measurement, duration_measurement};

/// Possible time & space complexity analysis results, in big-O notation, ordered from the best to the worst.\
/// Results are for a single execution of the algorithm -- each pass averages several of them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum BigOAlgorithmComplexity {
    BetterThanO1,
    O1,
    BetweenO1AndOLogN,
    OLogN,
    BetweenOLogNAndON,
    ON,
    BetweenONAndONLogN,
    ONLogN,
    BetweenONLogNAndON2,
    ON2,
    BetweenON2AndON3,
    ON3,
    BetweenON3AndON4,
    ON4,
    WorseThanON4,
}
impl BigOAlgorithmComplexity {
    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1        => "Better than O(1)",
            Self::O1                  => "O(1)",
            Self::BetweenO1AndOLogN   => "Worse than O(1), but better than O(log(n))",
            Self::OLogN               => "O(log(n))",
            Self::BetweenOLogNAndON   => "Worse than O(log(n)), but better than O(n)",
            Self::ON                  => "O(n)",
            Self::BetweenONAndONLogN  => "Worse than O(n), but better than O(n.log(n))",
            Self::ONLogN              => "O(n.log(n))",
            Self::BetweenONLogNAndON2 => "Worse than O(n.log(n)), but better than O(n²)",
            Self::ON2                 => "O(n²)",
            Self::BetweenON2AndON3    => "Worse than O(n²), but better than O(n³)",
            Self::ON3                 => "O(n³)",
            Self::BetweenON3AndON4    => "Worse than O(n³), but better than O(n^4)",
            Self::ON4                 => "O(n^4)",
            Self::WorseThanON4        => "Worse than O(n^4)",
        }
    }
    /// same as [Self::as_pretty_str()], with additional info for time analysis
    pub fn as_time_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1 => "Better than O(1) -- aren't the machines idle? too little work per pass?",
            Self::WorseThanON4 => "Worse than O(n^4) -- exponential algorithm, like naive recursion?",
            _ => self.as_pretty_str(),
        }
    }
    /// verbose description for each enum element, provided we're analysing space complexity
    pub fn as_space_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1 => "Better than O(1) -- are initialization allocations involved?",
            Self::WorseThanON4 => "Worse than O(n^4) -- really, really bad algorithm or is there a hidden bug?",
            _ => self.as_pretty_str(),
        }
    }
}

/// Input sizes used on each of the 2 passes needed for the analysis
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmPassesInfo {
    pub pass1_n: u32,
    pub pass2_n: u32,
    /// how many times the algorithm ran on each pass to compute its average time
    pub iterations: u32,
}

/// The average time a single execution took on passes 1 & 2
#[derive(Debug, Clone, Copy, Default)]
pub struct BigOTimeMeasurements {
    pub pass_1_measurements: Duration,
    pub pass_2_measurements: Duration,
}

/// memory usage measurements, in bytes, for a pass execution -- 2 of them are stored in [BigOSpaceMeasurements]
/// and are required to perform the space complexity analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BigOSpacePassMeasurements {
    /// heap memory in use just before starting the pass
    pub used_memory_before: usize,
    /// heap memory in use just after the pass execution
    pub used_memory_after:  usize,
    /// maximum heap memory in use during the pass execution
    pub max_used_memory:    usize,
    /// minimum heap memory in use during the pass execution
    pub min_used_memory:    usize,
}
impl BigOSpacePassMeasurements {
    /// the most memory the pass needed on top of what was in use when it started
    pub fn peak_used_memory(&self) -> usize {
        self.max_used_memory.saturating_sub(self.used_memory_before)
    }
}
impl Display for BigOSpacePassMeasurements {
    // shows the used or freed memory, followed by the peak usage
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let used_memory = self.used_memory_after as i64 - self.used_memory_before as i64;
        let sign = if used_memory > 0 {"+"} else if used_memory < 0 {"-"} else {""};
        write!(f, "{}{} (peak {})", sign, bytes_measurement(used_memory.unsigned_abs() as f64), bytes_measurement(self.peak_used_memory() as f64))
    }
}

/// represents an algorithm's memory usage measurements for passes 1 & 2, so that it can have it's space complexity analyzed
#[derive(Debug, Clone, Copy, Default)]
pub struct BigOSpaceMeasurements {
    pub pass_1_measurements: BigOSpacePassMeasurements,
    pub pass_2_measurements: BigOSpacePassMeasurements,
}

/// Everything measured for the 2 passes of an algorithm, so it may have its time & space complexities analysed
pub struct AlgorithmMeasurements<'a> {
    /// a name for these measurements, for presentation purposes
    pub measurement_name:   &'a str,
    pub passes_info:        AlgorithmPassesInfo,
    pub time_measurements:  BigOTimeMeasurements,
    pub space_measurements: BigOSpaceMeasurements,
}
impl Display for AlgorithmMeasurements<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // placing those in string variables since {:>12} seem not to work on implementers of Display
        let pass_1_time  = duration_measurement(self.time_measurements.pass_1_measurements).to_string();
        let pass_2_time  = duration_measurement(self.time_measurements.pass_2_measurements).to_string();
        let pass_1_space = self.space_measurements.pass_1_measurements.to_string();
        let pass_2_space = self.space_measurements.pass_2_measurements.to_string();
        write!(f, "'{}' measurements ({} iterations per pass):\n\
                   pass            t⁻                        Δs             n\n\
                   1) {:>13}  {:>24}  {:>12}\n\
                   2) {:>13}  {:>24}  {:>12}\n",
               self.measurement_name, self.passes_info.iterations,
               pass_1_time, pass_1_space, self.passes_info.pass1_n,
               pass_2_time, pass_2_space, self.passes_info.pass2_n)
    }
}

/// Return result for the growth analysis functions: the observed complexities & the measurements they came from
pub struct BigOAlgorithmAnalysis<'a> {
    pub time_complexity:        BigOAlgorithmComplexity,
    pub space_complexity:       BigOAlgorithmComplexity,
    pub algorithm_measurements: AlgorithmMeasurements<'a>,
}
impl Display for BigOAlgorithmAnalysis<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\
                   --> Algorithm  Time Analysis: {}\n\
                   --> Algorithm Space Analysis: {}\n",
               self.algorithm_measurements,
               self.time_complexity.as_time_pretty_str(),
               self.space_complexity.as_space_pretty_str())
    }
}
