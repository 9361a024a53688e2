/// Resistor divider scaling the battery voltage into the ADC input range.
///
/// Vout = (Vin * R2) / (R1 + R2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryDivider {
    pub r1_ohms: f32,
    pub r2_ohms: f32,
}

impl BatteryDivider {
    pub const fn new(r1_ohms: f32, r2_ohms: f32) -> Self {
        Self { r1_ohms, r2_ohms }
    }

    /// Both resistances finite and strictly positive (rejects NaN as well).
    pub fn is_valid(&self) -> bool {
        self.r1_ohms.is_finite()
            && self.r2_ohms.is_finite()
            && self.r1_ohms > 0.0
            && self.r2_ohms > 0.0
    }

    /// Voltage seen by the ADC for a given battery voltage.
    pub fn output_voltage(&self, vin: f32) -> f32 {
        vin * self.r2_ohms / (self.r1_ohms + self.r2_ohms)
    }

    /// Battery voltage for a voltage measured at the divider tap.
    pub fn input_voltage(&self, vout: f32) -> f32 {
        vout * (self.r1_ohms + self.r2_ohms) / self.r2_ohms
    }

    pub fn battery_millivolts(&self, adc_millivolts: u32) -> u32 {
        let mv = self.input_voltage(adc_millivolts as f32);
        // round half up, saturating
        if mv >= u32::MAX as f32 {
            u32::MAX
        } else {
            (mv + 0.5) as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{} != {}", a, b);
    }

    #[test]
    fn test_equal_divider_halves_voltage() {
        let divider = BatteryDivider::new(100_000.0, 100_000.0);
        assert_close(divider.output_voltage(4.2), 2.1);
        assert_close(divider.input_voltage(2.1), 4.2);
        assert_eq!(divider.battery_millivolts(1850), 3700);
    }

    #[test]
    fn test_unequal_divider() {
        let divider = BatteryDivider::new(300_000.0, 100_000.0);
        assert_close(divider.output_voltage(4.0), 1.0);
        assert_eq!(divider.battery_millivolts(1000), 4000);
    }

    #[test]
    fn test_invalid_resistances() {
        assert!(!BatteryDivider::new(0.0, 100_000.0).is_valid());
        assert!(!BatteryDivider::new(100_000.0, -1.0).is_valid());
        assert!(!BatteryDivider::new(f32::NAN, 100_000.0).is_valid());
        assert!(!BatteryDivider::new(f32::INFINITY, 100_000.0).is_valid());
        assert!(BatteryDivider::new(47_000.0, 100_000.0).is_valid());
    }
}
