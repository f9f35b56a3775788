use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::assembly_file::{self, AssemblyFileError};
use crate::config::{self, Config};
use crate::conversion;
use crate::i18n::{self, keys, Translator};
use crate::quantity::QuantityKind;
use crate::report;
use crate::thermal::{self, demo, ConfigurationError, WallAssembly};
use crate::ui_cli::{self, MenuChoice};

/// 명령행 인자.
#[derive(Debug, Parser)]
#[command(name = "thermal_protection_building")]
#[command(about = "Thermal protection of multi-layer building walls (СП 50.13330.2012)")]
pub struct Cli {
    /// 언어: auto/ru/en
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    pub lang: String,

    /// 설정 파일 경로 (기본 ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 생략하면 대화형 메뉴를 실행한다
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Checks whether a wall meets the required heat-transfer resistance
    Check {
        /// TOML wall description
        file: Option<PathBuf>,

        /// Use the Saint Petersburg demo wall
        #[arg(long, conflicts_with = "file")]
        demo: bool,
    },
    /// Solves the thickness of the single layer without a thickness
    Thickness {
        /// TOML wall description
        file: Option<PathBuf>,

        /// Use the Nizhny Novgorod demo wall
        #[arg(long, conflicts_with = "file")]
        demo: bool,

        /// Substitute the solved thickness and print the resulting wall resistance
        #[arg(long)]
        apply: bool,
    },
    /// Prints both demo walls with their results
    Demo,
    /// Converts a value between units (length, conductivity, alpha, resistance)
    Convert {
        kind: String,
        value: f64,
        from: String,
        to: String,
    },
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 벽체 파일 오류
    AssemblyFile(AssemblyFileError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 두께 계산 전제조건 위반
    Configuration(ConfigurationError),
    /// 벽체 파일도 데모도 지정하지 않음
    MissingInput,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::AssemblyFile(e) => write!(f, "{e}"),
            AppError::Conversion(e) => write!(f, "{e}"),
            AppError::Configuration(e) => write!(f, "{e}"),
            AppError::MissingInput => write!(f, "pass a wall file or --demo"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<AssemblyFileError> for AppError {
    fn from(value: AssemblyFileError) -> Self {
        AppError::AssemblyFile(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<ConfigurationError> for AppError {
    fn from(value: ConfigurationError) -> Self {
        AppError::Configuration(value)
    }
}

/// 설정과 언어를 준비한 뒤 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_or_default_at(path)?,
        None => config::load_or_default()?,
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, None);

    match cli.command {
        Some(Commands::Check { file, demo: use_demo }) => {
            let mut wall = select_wall(file, use_demo, demo::compliance_demo)?;
            println!("{}", compliance_report(&mut wall, &tr, &cfg));
        }
        Some(Commands::Thickness {
            file,
            demo: use_demo,
            apply,
        }) => {
            let mut wall = select_wall(file, use_demo, demo::thickness_demo)?;
            println!("{}", thickness_report(&mut wall, apply, &tr, &cfg)?);
        }
        Some(Commands::Demo) => run_demos(&tr, &cfg)?,
        Some(Commands::Convert {
            kind,
            value,
            from,
            to,
        }) => {
            let kind = QuantityKind::parse(&kind)
                .ok_or_else(|| conversion::ConversionError::UnsupportedQuantity(kind.clone()))?;
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{result} {to}");
        }
        None => run_menu(&mut cfg, &tr)?,
    }
    Ok(())
}

fn select_wall(
    file: Option<PathBuf>,
    use_demo: bool,
    preset: fn() -> WallAssembly,
) -> Result<WallAssembly, AppError> {
    match (file, use_demo) {
        (_, true) => Ok(preset()),
        (Some(path), false) => Ok(assembly_file::load_assembly(&path)?),
        (None, false) => Err(AppError::MissingInput),
    }
}

/// 적합성 검토를 실행하고 보고서를 만든다.
pub fn compliance_report(wall: &mut WallAssembly, tr: &Translator, cfg: &Config) -> String {
    let res = thermal::check_compliance(wall);
    report::render_compliance(wall, &res, tr, cfg)
}

/// 두께 계산을 실행하고 보고서를 만든다. `apply`면 계산한 두께를 넣은 벽의 열저항까지 덧붙인다.
///
/// 두께를 넣은 벽은 요구치와 정확히 같으므로 적합 여부 대신 한계값이라고 표시한다.
/// 환산 열저항에는 균질계수가 곱해지므로 1이 아니면 요구치와 어긋나 보일 수 있다.
pub fn thickness_report(
    wall: &mut WallAssembly,
    apply: bool,
    tr: &Translator,
    cfg: &Config,
) -> Result<String, AppError> {
    let res = thermal::solve_thickness(wall)?;
    let mut text = report::render_thickness(wall, &res, tr, cfg);
    if apply && wall.apply_thickness(res.unknown_layer_index, res.thickness_m) {
        let mut check = wall.clone();
        check.temperature_air_inside = check.temperature_air_optimum_inside;
        let checked = thermal::check_compliance(&mut check);
        text.push('\n');
        text.push_str(&report::render_applied(&check, &checked, tr, cfg));
    }
    Ok(text)
}

fn run_demos(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", compliance_report(&mut demo::compliance_demo(), tr, cfg));
    println!("{}", thickness_report(&mut demo::thickness_demo(), false, tr, cfg)?);
    Ok(())
}

/// 대화형 메뉴 루프를 실행한다.
fn run_menu(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut input = io::stdin().lock();
    loop {
        match ui_cli::main_menu(&mut input, tr)? {
            MenuChoice::Compliance => {
                let mut wall = ui_cli::read_compliance_wall(&mut input, tr)?;
                println!("{}", compliance_report(&mut wall, tr, config));
            }
            MenuChoice::Thickness => {
                let mut wall = ui_cli::read_thickness_wall(&mut input, tr)?;
                match thickness_report(&mut wall, false, tr, config) {
                    Ok(text) => println!("{text}"),
                    Err(e) => eprintln!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
                }
            }
            MenuChoice::DemoCompliance => {
                println!("{}", compliance_report(&mut demo::compliance_demo(), tr, config));
            }
            MenuChoice::DemoThickness => {
                println!(
                    "{}",
                    thickness_report(&mut demo::thickness_demo(), false, tr, config)?
                );
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(&mut input, tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
