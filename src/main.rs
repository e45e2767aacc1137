use clap::Parser;
use env_logger::Env;
use snellview::{
    console::{list_media, Args, PartialArgs},
    error::SnellResult,
    medium_table::MediumTable,
    plottable::{PlotParameters, Plottable},
    reporter::AnalysisReport,
    solver::Interface,
};
use std::io::{self, BufReader, BufWriter};

fn main() -> SnellResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    //parse CLI arguments
    let part_args = PartialArgs::parse();
    let table = MediumTable::load(part_args.dataset.as_deref())?;
    if part_args.list {
        print!("{}", list_media(&table));
        return Ok(());
    }
    let args = {
        let mut reader = BufReader::new(io::stdin());
        let mut writer = BufWriter::new(io::stdout());
        Args::from_partial_args(part_args, &table, &mut reader, &mut writer)?
    };

    //solve the refraction problem
    let diagram = Interface::from_media(&args.medium1, &args.medium2).refract(args.angle);
    let report = AnalysisReport::new(&args.medium1, &args.medium2, diagram);
    print!("{}", report.summary());

    if let Some(output) = &args.output {
        report.diagram().to_plot(&PlotParameters::new(output)?)?;
    }
    if let Some(report_path) = &args.report {
        report.write_json(report_path)?;
    }
    Ok(())
}
