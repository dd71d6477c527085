use super::TimeOfDay;

/// Second-hand rotation in degrees: 6° per second.
#[inline]
pub fn second_angle(reading: &TimeOfDay) -> f32 {
    reading.seconds as f32 * 6.0
}

/// Minute-hand rotation in degrees: 6° per minute.
#[inline]
pub fn minute_angle(reading: &TimeOfDay) -> f32 {
    reading.minutes as f32 * 6.0
}

/// Hour-hand rotation in degrees: 30° per hour on a 12-hour dial, with the
/// reading's fractional hour sweeping the hand between hour marks.
#[inline]
pub fn hour_angle(reading: &TimeOfDay) -> f32 {
    (reading.hours % 12.0) * 30.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_past_three() {
        let reading = TimeOfDay::new(3.5, 30, 0);
        assert_eq!(second_angle(&reading), 0.0);
        assert_eq!(minute_angle(&reading), 180.0);
        assert_eq!(hour_angle(&reading), 105.0);
    }

    #[test]
    fn midnight_with_seconds() {
        let reading = TimeOfDay::new(0.0, 0, 45);
        assert_eq!(second_angle(&reading), 270.0);
        assert_eq!(minute_angle(&reading), 0.0);
        assert_eq!(hour_angle(&reading), 0.0);
    }

    #[test]
    fn hour_hand_wraps_at_noon() {
        assert_eq!(hour_angle(&TimeOfDay::new(12.0, 0, 0)), 0.0);
        assert_eq!(hour_angle(&TimeOfDay::new(15.5, 30, 0)), 105.0);
        assert_eq!(hour_angle(&TimeOfDay::new(23.0, 0, 0)), 330.0);
    }

    #[test]
    fn angles_cover_full_turn() {
        assert_eq!(second_angle(&TimeOfDay::new(0.0, 0, 59)), 354.0);
        assert_eq!(minute_angle(&TimeOfDay::new(0.0, 59, 0)), 354.0);
    }
}
