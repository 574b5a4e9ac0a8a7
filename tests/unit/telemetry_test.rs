// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use calcrs::utils::telemetry;
    use calcrs::{Calculator, CalculatorOptions};

    #[test]
    fn test_telemetry_initialization() {
        telemetry::init_telemetry();
        // Installing twice must not panic
        telemetry::init_telemetry();

        tracing::debug!("This is a debug message");
        tracing::info!(precision = 2, "structured message");

        let calc = Calculator::new(CalculatorOptions { precision: 2 });
        assert_eq!(calc.add(1.333, 3.2), 4.53);
    }
}
