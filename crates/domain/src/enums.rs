use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity at which historical prices are grouped before purchases are simulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResamplePeriod {
    /// One bucket per trading record.
    Daily,
    /// One bucket per calendar month.
    #[default]
    Monthly,
    /// One bucket per calendar year.
    Yearly,
}

impl ResamplePeriod {
    /// Converts the period to its lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ResamplePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResamplePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" | "d" => Ok(Self::Daily),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "yearly" | "year" | "y" => Ok(Self::Yearly),
            other => Err(format!("Unknown resample period: {other}")),
        }
    }
}

/// Which OHLC field is treated as the purchase price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricePolicy {
    /// Buy at the close ("buy uniform").
    #[default]
    Close,
    /// Buy at the low ("buy lowest").
    Low,
    /// Buy at the high ("buy highest").
    High,
}

impl PricePolicy {
    /// Converts the policy to its lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PricePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "close" | "uniform" | "buy-uniform" => Ok(Self::Close),
            "low" | "lowest" | "buy-lowest" => Ok(Self::Low),
            "high" | "highest" | "buy-highest" => Ok(Self::High),
            other => Err(format!("Unknown price policy: {other}")),
        }
    }
}

/// How often a recurring deposit is added in a compound projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepositFrequency {
    /// Twelve deposits (and compounding periods) per year.
    #[default]
    Monthly,
    /// One deposit (and compounding period) per year.
    Yearly,
}

impl DepositFrequency {
    /// Number of compounding periods in one year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::Yearly => 1,
        }
    }

    /// Converts the frequency to its lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for DepositFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DepositFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "yearly" | "year" | "y" => Ok(Self::Yearly),
            other => Err(format!("Unknown deposit frequency: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parsing() {
        assert_eq!("daily".parse(), Ok(ResamplePeriod::Daily));
        assert_eq!("Monthly".parse(), Ok(ResamplePeriod::Monthly));
        assert_eq!(" y ".parse(), Ok(ResamplePeriod::Yearly));
        assert!("weekly".parse::<ResamplePeriod>().is_err());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("buy-lowest".parse(), Ok(PricePolicy::Low));
        assert_eq!("HIGH".parse(), Ok(PricePolicy::High));
        assert_eq!("uniform".parse(), Ok(PricePolicy::Close));
        assert!("open".parse::<PricePolicy>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PricePolicy::default(), PricePolicy::Close);
        assert_eq!(ResamplePeriod::default(), ResamplePeriod::Monthly);
        assert_eq!(DepositFrequency::default(), DepositFrequency::Monthly);
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(DepositFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(DepositFrequency::Yearly.periods_per_year(), 1);
    }
}
