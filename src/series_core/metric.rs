//! The twenty recognized state metrics and their chart placement

use super::record::AggregatedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricFamily {
    Price,
    Change,
    Acceleration,
    Volume,
    AccountAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Price,
    PriceAverage,
    PriceStandardDeviation,
    PriceUpperLimit,
    PriceLowerLimit,

    Change,
    ChangeAverage,
    ChangeStandardDeviation,
    ChangeUpperLimit,
    ChangeLowerLimit,

    Acceleration,
    AccelerationAverage,
    AccelerationStandardDeviation,
    AccelerationUpperLimit,
    AccelerationLowerLimit,

    Volume,
    VolumeAverage,
    VolumeUpperLimit,
    VolumeLowerLimit,

    AccountAmount,
}

impl Metric {
    pub const COUNT: usize = 20;

    pub fn all() -> [Metric; Metric::COUNT] {
        [
            Metric::Price,
            Metric::PriceAverage,
            Metric::PriceStandardDeviation,
            Metric::PriceUpperLimit,
            Metric::PriceLowerLimit,
            Metric::Change,
            Metric::ChangeAverage,
            Metric::ChangeStandardDeviation,
            Metric::ChangeUpperLimit,
            Metric::ChangeLowerLimit,
            Metric::Acceleration,
            Metric::AccelerationAverage,
            Metric::AccelerationStandardDeviation,
            Metric::AccelerationUpperLimit,
            Metric::AccelerationLowerLimit,
            Metric::Volume,
            Metric::VolumeAverage,
            Metric::VolumeUpperLimit,
            Metric::VolumeLowerLimit,
            Metric::AccountAmount,
        ]
    }

    /// Position in `all()`, used to index per-metric storage
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Field name used by the upstream records and the chart payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Price => "price",
            Metric::PriceAverage => "priceAverage",
            Metric::PriceStandardDeviation => "priceStandardDeviation",
            Metric::PriceUpperLimit => "priceUpperLimit",
            Metric::PriceLowerLimit => "priceLowerLimit",
            Metric::Change => "change",
            Metric::ChangeAverage => "changeAverage",
            Metric::ChangeStandardDeviation => "changeStandardDeviation",
            Metric::ChangeUpperLimit => "changeUpperLimit",
            Metric::ChangeLowerLimit => "changeLowerLimit",
            Metric::Acceleration => "acceleration",
            Metric::AccelerationAverage => "accelerationAverage",
            Metric::AccelerationStandardDeviation => "accelerationStandardDeviation",
            Metric::AccelerationUpperLimit => "accelerationUpperLimit",
            Metric::AccelerationLowerLimit => "accelerationLowerLimit",
            Metric::Volume => "volume",
            Metric::VolumeAverage => "volumeAverage",
            Metric::VolumeUpperLimit => "volumeUpperLimit",
            Metric::VolumeLowerLimit => "volumeLowerLimit",
            Metric::AccountAmount => "accountAmount",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Metric::all().into_iter().find(|m| m.as_str() == s)
    }

    pub fn family(&self) -> MetricFamily {
        match self {
            Metric::Price
            | Metric::PriceAverage
            | Metric::PriceStandardDeviation
            | Metric::PriceUpperLimit
            | Metric::PriceLowerLimit => MetricFamily::Price,
            Metric::Change
            | Metric::ChangeAverage
            | Metric::ChangeStandardDeviation
            | Metric::ChangeUpperLimit
            | Metric::ChangeLowerLimit => MetricFamily::Change,
            Metric::Acceleration
            | Metric::AccelerationAverage
            | Metric::AccelerationStandardDeviation
            | Metric::AccelerationUpperLimit
            | Metric::AccelerationLowerLimit => MetricFamily::Acceleration,
            Metric::Volume
            | Metric::VolumeAverage
            | Metric::VolumeUpperLimit
            | Metric::VolumeLowerLimit => MetricFamily::Volume,
            Metric::AccountAmount => MetricFamily::AccountAmount,
        }
    }

    /// Legend label shown by the chart
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Price => "Price",
            Metric::PriceAverage => "Price Average",
            Metric::PriceStandardDeviation => "Price Standard Deviation",
            Metric::PriceUpperLimit => "Price Upper Limit",
            Metric::PriceLowerLimit => "Price Lower Limit",
            Metric::Change => "Change",
            Metric::ChangeAverage => "Change Average",
            Metric::ChangeStandardDeviation => "Change Standard Deviation",
            Metric::ChangeUpperLimit => "Change Upper Limit",
            Metric::ChangeLowerLimit => "Change Lower Limit",
            Metric::Acceleration => "Acceleration",
            Metric::AccelerationAverage => "Acceleration Average",
            Metric::AccelerationStandardDeviation => "Acceleration Standard Deviation",
            Metric::AccelerationUpperLimit => "Acceleration Upper Limit",
            Metric::AccelerationLowerLimit => "Acceleration Lower Limit",
            Metric::Volume => "Volume",
            Metric::VolumeAverage => "Volume Average",
            Metric::VolumeUpperLimit => "Volume Upper Limit",
            Metric::VolumeLowerLimit => "Volume Lower Limit",
            Metric::AccountAmount => "Account Amount",
        }
    }

    /// Stacked y-axis (0..=4) the series is drawn on
    pub fn axis(&self) -> usize {
        match self.family() {
            MetricFamily::Price => 0,
            MetricFamily::AccountAmount => 1,
            MetricFamily::Change => 2,
            MetricFamily::Acceleration => 3,
            MetricFamily::Volume => 4,
        }
    }

    /// Read this metric's value out of a bucketed record
    pub fn value_of(&self, record: &AggregatedRecord) -> f64 {
        match self {
            Metric::Price => record.price,
            Metric::PriceAverage => record.price_average,
            Metric::PriceStandardDeviation => record.price_standard_deviation,
            Metric::PriceUpperLimit => record.price_upper_limit,
            Metric::PriceLowerLimit => record.price_lower_limit,
            Metric::Change => record.change,
            Metric::ChangeAverage => record.change_average,
            Metric::ChangeStandardDeviation => record.change_standard_deviation,
            Metric::ChangeUpperLimit => record.change_upper_limit,
            Metric::ChangeLowerLimit => record.change_lower_limit,
            Metric::Acceleration => record.acceleration,
            Metric::AccelerationAverage => record.acceleration_average,
            Metric::AccelerationStandardDeviation => record.acceleration_standard_deviation,
            Metric::AccelerationUpperLimit => record.acceleration_upper_limit,
            Metric::AccelerationLowerLimit => record.acceleration_lower_limit,
            Metric::Volume => record.volume,
            Metric::VolumeAverage => record.volume_average,
            Metric::VolumeUpperLimit => record.volume_upper_limit,
            Metric::VolumeLowerLimit => record.volume_lower_limit,
            Metric::AccountAmount => record.account_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position() {
        for (i, metric) in Metric::all().iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
    }

    #[test]
    fn test_name_lookup() {
        for metric in Metric::all() {
            assert_eq!(Metric::from_str(metric.as_str()), Some(metric));
        }
        assert_eq!(Metric::from_str("volumeStandardDeviation"), None);
    }

    #[test]
    fn test_axis_assignment() {
        assert_eq!(Metric::PriceLowerLimit.axis(), 0);
        assert_eq!(Metric::AccountAmount.axis(), 1);
        assert_eq!(Metric::ChangeAverage.axis(), 2);
        assert_eq!(Metric::AccelerationStandardDeviation.axis(), 3);
        assert_eq!(Metric::VolumeUpperLimit.axis(), 4);
        assert_eq!(Metric::VolumeUpperLimit.label(), "Volume Upper Limit");
    }
}
