//! Closed-form results for the M/M/n station, used as a reference for
//! simulated waiting times.

use super::error::{SimError, SimResult};

fn check_stable(load: f64, servers: usize) -> SimResult<()> {
    if servers == 0 {
        return Err(SimError::InvalidParameter(
            "server count must be positive".to_string(),
        ));
    }
    if !(load > 0.0 && load < 1.0) {
        return Err(SimError::InvalidParameter(format!(
            "closed form needs 0 < load < 1, got {}",
            load
        )));
    }
    Ok(())
}

/// Erlang C: probability that an arriving customer has to wait
pub fn erlang_c(servers: usize, load: f64) -> SimResult<f64> {
    check_stable(load, servers)?;

    // Erlang B by recursion over the server count, then converted to C.
    // Every intermediate stays in [0, 1], so large stations cannot overflow.
    let offered = servers as f64 * load;
    let mut blocking = 1.0;
    for k in 1..=servers {
        blocking = offered * blocking / (k as f64 + offered * blocking);
    }

    Ok(blocking / (1.0 - load * (1.0 - blocking)))
}

/// Mean waiting time before service in an M/M/n station
pub fn expected_wait_mmn(load: f64, service_rate: f64, servers: usize) -> SimResult<f64> {
    if !(service_rate.is_finite() && service_rate > 0.0) {
        return Err(SimError::InvalidParameter(format!(
            "service rate must be positive, got {}",
            service_rate
        )));
    }
    let waiting_probability = erlang_c(servers, load)?;
    Ok(waiting_probability / (1.0 - load) / (service_rate * servers as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_server_matches_mm1() {
        // M/M/1: P(wait) = rho, W = rho / (mu (1 - rho))
        for &rho in &[0.1, 0.5, 0.9] {
            assert!((erlang_c(1, rho).unwrap() - rho).abs() < 1e-12);
            let w = expected_wait_mmn(rho, 2.0, 1).unwrap();
            assert!((w - rho / (2.0 * (1.0 - rho))).abs() < 1e-12);
        }
    }

    #[test]
    fn test_two_servers() {
        let c = erlang_c(2, 0.5).unwrap();
        assert!((c - 1.0 / 3.0).abs() < 1e-12);
        let w = expected_wait_mmn(0.5, 1.0, 2).unwrap();
        assert!((w - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_more_servers_wait_less() {
        let w1 = expected_wait_mmn(0.8, 1.0, 1).unwrap();
        let w2 = expected_wait_mmn(0.8, 1.0, 2).unwrap();
        let w4 = expected_wait_mmn(0.8, 1.0, 4).unwrap();
        assert!(w1 > w2 && w2 > w4);
    }

    #[test]
    fn test_many_servers_do_not_overflow() {
        let c = erlang_c(500, 0.95).unwrap();
        assert!(c.is_finite() && (0.0..=1.0).contains(&c));
    }

    #[test]
    fn test_very_large_station_stays_finite() {
        for &rho in &[0.5, 0.9, 0.99] {
            let c = erlang_c(1000, rho).unwrap();
            assert!(c.is_finite() && (0.0..=1.0).contains(&c), "rho {}: {}", rho, c);
        }
        // About 5.9e-4 for a thousand servers at rho = 0.9
        let c = erlang_c(1000, 0.9).unwrap();
        assert!(c > 1e-4 && c < 1e-3, "{}", c);
        assert!(erlang_c(1000, 0.99).unwrap() > erlang_c(1000, 0.9).unwrap());
        let w = expected_wait_mmn(0.9, 1.0, 1000).unwrap();
        assert!(w.is_finite() && w >= 0.0);
    }

    #[test]
    fn test_unstable_load_rejected() {
        assert!(erlang_c(1, 1.0).is_err());
        assert!(erlang_c(2, 0.0).is_err());
        assert!(erlang_c(0, 0.5).is_err());
        assert!(expected_wait_mmn(0.5, 0.0, 1).is_err());
    }
}
