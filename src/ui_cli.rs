use std::io::{self, BufRead, Write};

use crate::app::{self, AppError};
use crate::config::Config;
use crate::conversion;
use crate::error_metric::{self, ZeroPolicy};
use crate::quantity::QuantityKind;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    BoundaryPressure,
    BoundaryCurve,
    LogError,
    Settings,
    Exit,
}

/// 메뉴 번호를 선택지로 바꾼다.
pub fn parse_menu(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::UnitConversion),
        "2" => Some(MenuChoice::BoundaryPressure),
        "3" => Some(MenuChoice::BoundaryCurve),
        "4" => Some(MenuChoice::LogError),
        "5" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Phase Plot Toolbox ===");
    println!("1) 단위 변환기");
    println!("2) CO2 경계 압력");
    println!("3) CO2 경계 곡선");
    println!("4) 로그 백분율 오차");
    println!("5) 설정");
    println!("0) 종료");
    read_menu_choice(&mut io::stdin().lock())
}

/// 올바른 메뉴 번호가 나올 때까지 읽는다. 입력이 끝나면 종료로 본다.
pub fn read_menu_choice<R: BufRead>(input: &mut R) -> Result<MenuChoice, AppError> {
    loop {
        let sel = match read_line_from(input, "메뉴 선택: ") {
            Ok(sel) => sel,
            Err(AppError::UnexpectedEof) => return Ok(MenuChoice::Exit),
            Err(e) => return Err(e),
        };
        match parse_menu(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(_cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 온도  2) 압력");
    println!("참고: psig는 게이지 기준(0 psig = 14.696 psia)으로 처리됩니다.");
    let kind = loop {
        match read_line("항목 번호를 입력: ")?.trim() {
            "1" => break QuantityKind::Temperature,
            "2" => break QuantityKind::Pressure,
            _ => println!("지원하지 않는 번호입니다."),
        }
    };
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: K, F, psig): ")?;
    let to_unit = read_line("변환 단위(ex: C, Pa, MPa): ")?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("변환 결과: {result} {}", to_unit.trim());
    Ok(())
}

/// 온도 하나에 대한 경계 압력을 출력한다.
pub fn handle_boundary_pressure(_cfg: &Config) -> Result<(), AppError> {
    println!("\n-- CO2 경계 압력 --");
    let t_k = read_f64("온도 [K]: ")?;
    println!("{}", app::format_boundary(t_k));
    Ok(())
}

/// 경계 곡선 샘플을 표로 출력한다.
pub fn handle_boundary_curve(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- CO2 경계 곡선 --");
    let s = read_line(&format!("샘플 수 (엔터 시 {}): ", cfg.boundary_samples))?;
    let points = s.trim().parse::<usize>().unwrap_or(cfg.boundary_samples);
    println!("{}", app::format_curve(points));
    Ok(())
}

/// 쉼표 구분 목록 두 개를 받아 로그 백분율 오차를 출력한다.
pub fn handle_log_error(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 로그 백분율 오차 --");
    let reference = read_list("기준값 (쉼표 구분): ")?;
    let computed = read_list("계산값 (쉼표 구분): ")?;
    let e = error_metric::log_percentage_error_with(&reference, &computed, cfg.error_options())?;
    println!("log10 오차: {}", app::format_values(&e));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 0 처리 방식: {:?}", cfg.zero_policy);
    println!("1) 모든 0 대체  2) 0이 둘 이상일 때만 대체");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.zero_policy = match sel.trim() {
        "1" => ZeroPolicy::ReplaceAll,
        "2" => ZeroPolicy::LegacyMultipleOnly,
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            cfg.zero_policy
        }
    };
    println!("0 처리 방식이 {:?} 로 설정되었습니다.", cfg.zero_policy);
    Ok(())
}

/// `"1, 2.5,-3"` 같은 문자열을 숫자 목록으로 바꾼다. 잘못된 항목이 있으면 `None`.
pub fn parse_list(s: &str) -> Option<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<f64>().ok())
        .collect()
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 0바이트를 읽으면 `UnexpectedEof`.
pub fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::UnexpectedEof);
    }
    Ok(buf)
}

fn read_f64_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line_from(input, prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_list_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<Vec<f64>, AppError> {
    loop {
        let s = read_line_from(input, prompt)?;
        match parse_list(&s) {
            Some(v) => return Ok(v),
            None => println!("쉼표로 구분한 숫자를 입력하세요."),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    read_f64_from(&mut io::stdin().lock(), prompt)
}

fn read_list(prompt: &str) -> Result<Vec<f64>, AppError> {
    read_list_from(&mut io::stdin().lock(), prompt)
}
