//! Blackbody emission model
//!
//! Pure evaluation of Planck's law in frequency form and of the frequency
//! at which emission peaks for a given temperature.

/// Planck constant [J.s]
pub const PLANCK: f64 = 6.62606957e-34;
/// Speed of light in vacuum [m/s]
pub const LIGHT_SPEED: f64 = 299792458.0;
/// Boltzmann constant [J/K]
pub const BOLTZMANN: f64 = 1.3806488e-23;
/// Wien displacement constant [m.K]
pub const WIEN: f64 = 2.8978e-3;

/// Spectral radiance of an ideal thermal emitter [W.sr^-1.m^-2.Hz^-1]
///
/// Evaluates `(2hf^3/c^2)/(exp(hf/kT) - 1)` at the given temperature [K]
/// and frequency [Hz]. Outside the law's domain the value saturates to
/// zero: `frequency <= 0` returns the `f -> 0+` limit `0.0`, and
/// `temperature <= 0` is clamped to the same floor.
pub fn radiance(temperature: f64, frequency: f64) -> f64 {
    if temperature <= 0f64 || frequency <= 0f64 {
        return 0f64;
    }
    let first = 2f64 * PLANCK * frequency * frequency * frequency / (LIGHT_SPEED * LIGHT_SPEED);
    first / ((PLANCK * frequency / (BOLTZMANN * temperature)).exp() - 1f64)
}

/// Frequency at which `radiance(temperature, .)` peaks [Hz]
pub fn peak_frequency(temperature: f64) -> f64 {
    0.568 * (LIGHT_SPEED / WIEN) * temperature
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radiance_is_positive() {
        for temperature in [3f64, 100f64, 5778f64, 1e6] {
            for frequency in [1e9, 1e12, 1e15] {
                assert!(radiance(temperature, frequency) > 0f64);
            }
        }
    }

    #[test]
    fn radiance_saturates_outside_domain() {
        assert_eq!(radiance(100f64, 0f64), 0f64);
        assert_eq!(radiance(100f64, -1e12), 0f64);
        assert_eq!(radiance(0f64, 1e12), 0f64);
        assert_eq!(radiance(-273.15, 1e12), 0f64);
    }

    #[test]
    fn peak_frequency_scales_linearly() {
        for temperature in [1f64, 100f64, 5778f64] {
            let ratio = peak_frequency(2f64 * temperature) / (2f64 * peak_frequency(temperature));
            assert!((ratio - 1f64).abs() < 1e-12);
        }
    }

    #[test]
    fn radiance_peaks_near_peak_frequency() {
        for temperature in [100f64, 300f64, 5778f64] {
            let f_peak = peak_frequency(temperature);
            let at_peak = radiance(temperature, f_peak);
            assert!(at_peak > radiance(temperature, 0.9 * f_peak));
            assert!(at_peak > radiance(temperature, 1.1 * f_peak));
        }
    }

    #[test]
    fn radiance_is_deterministic() {
        assert_eq!(radiance(100f64, 1e12), radiance(100f64, 1e12));
        assert_eq!(peak_frequency(100f64), peak_frequency(100f64));
    }
}
