use crate::cli::{CalcArgs, CalcCommands, TemperatureInput};
use crate::error::{CliError, Result};
use crate::ui;
use comfy_table::{Attribute, Cell, Table};
use periodica::core::calc::{
    GasQuantity, GasSolution, IdealGas, celsius_to_kelvin, heat_transfer, kelvin_to_celsius,
};

pub fn run(args: CalcArgs) -> Result<()> {
    let report = match args.command {
        CalcCommands::Heat {
            mass,
            specific_heat,
            delta_t,
        } => heat_report(mass, specific_heat, delta_t)?,
        CalcCommands::Gas {
            pressure,
            volume,
            moles,
            temperature,
        } => {
            let solution = IdealGas {
                pressure,
                volume,
                moles,
                temperature,
            }
            .solve()?;
            gas_table(&solution).to_string()
        }
        CalcCommands::Temperature { input } => temperature_report(input)?,
    };
    println!("{}", report);
    Ok(())
}

fn heat_report(mass: f64, specific_heat: f64, delta_t: f64) -> Result<String> {
    let q = heat_transfer(mass, specific_heat, delta_t)?;
    let direction = if q < 0.0 { "released" } else { "absorbed" };
    Ok(format!(
        "q = {:.2} J ({:.3} kJ {})",
        q,
        q.abs() / 1000.0,
        direction
    ))
}

fn gas_table(solution: &GasSolution) -> Table {
    let mut table = Table::new();
    ui::apply_table_style(&mut table);
    table.set_header(vec!["Quantity", "Value", "Unit"]);
    let rows = [
        (GasQuantity::Pressure, solution.pressure),
        (GasQuantity::Volume, solution.volume),
        (GasQuantity::Moles, solution.moles),
        (GasQuantity::Temperature, solution.temperature),
    ];
    for (quantity, value) in rows {
        let mut cells = vec![
            Cell::new(quantity),
            Cell::new(format!("{value:.4}")),
            Cell::new(quantity.unit()),
        ];
        if quantity == solution.solved_for {
            cells = cells
                .into_iter()
                .map(|cell| cell.add_attribute(Attribute::Bold))
                .collect();
        }
        table.add_row(cells);
    }
    table
}

fn temperature_report(input: TemperatureInput) -> Result<String> {
    let report = match (input.celsius, input.kelvin) {
        (Some(celsius), _) => format!("{celsius:.2} °C = {:.2} K", celsius_to_kelvin(celsius)?),
        (None, Some(kelvin)) => format!("{kelvin:.2} K = {:.2} °C", kelvin_to_celsius(kelvin)?),
        (None, None) => {
            return Err(CliError::Argument(
                "Give a temperature with --celsius or --kelvin.".to_string(),
            ));
        }
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodica::core::calc::CalcError;

    #[test]
    fn heat_report_marks_released_heat() {
        assert_eq!(
            heat_report(100.0, 4.184, 10.0).unwrap(),
            "q = 4184.00 J (4.184 kJ absorbed)"
        );
        assert_eq!(
            heat_report(50.0, 2.0, -5.0).unwrap(),
            "q = -500.00 J (0.500 kJ released)"
        );
    }

    #[test]
    fn heat_report_surfaces_invalid_mass() {
        let result = heat_report(0.0, 4.184, 10.0);
        assert!(matches!(
            result,
            Err(CliError::Calc(CalcError::NotPositive { name: "mass", .. }))
        ));
    }

    #[test]
    fn gas_table_lists_all_four_quantities() {
        let solution = IdealGas {
            pressure: Some(101.325),
            volume: None,
            moles: Some(1.0),
            temperature: Some(273.15),
        }
        .solve()
        .unwrap();
        let rendered = gas_table(&solution).to_string();
        assert!(rendered.contains("volume"));
        assert!(rendered.contains("22.41"));
        assert_eq!(gas_table(&solution).row_iter().count(), 4);
    }

    #[test]
    fn temperature_report_converts_either_way() {
        let celsius = TemperatureInput {
            celsius: Some(25.0),
            kelvin: None,
        };
        assert_eq!(temperature_report(celsius).unwrap(), "25.00 °C = 298.15 K");

        let kelvin = TemperatureInput {
            celsius: None,
            kelvin: Some(0.0),
        };
        assert_eq!(temperature_report(kelvin).unwrap(), "0.00 K = -273.15 °C");
    }

    #[test]
    fn temperature_report_rejects_below_absolute_zero() {
        let input = TemperatureInput {
            celsius: Some(-300.0),
            kelvin: None,
        };
        assert!(matches!(
            temperature_report(input),
            Err(CliError::Calc(CalcError::BelowAbsoluteZero { .. }))
        ));
    }
}
