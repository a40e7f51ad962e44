use crate::core::{
    config::{validate_max_buttons, Config},
    error::Result,
    page_window::{compute_range_with, PageWindow},
    render::render_pager,
};
use serde::Serialize;

/// Options for `page-window range`; unset windowing values come from the config
#[derive(Debug, Default)]
pub struct RangeOptions {
    pub current: usize,
    pub total: usize,
    pub max_buttons: Option<usize>,
    pub side_buttons: Option<usize>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct RangeReport {
    pub current_page: usize,
    pub total_pages: usize,
    pub window: PageWindow,
}

/// Build the window for the requested page, clamping it into range first
pub fn build_range_report(options: &RangeOptions, config: &Config) -> Result<RangeReport> {
    let mut window_options = config.window_options();
    if let Some(max_buttons) = options.max_buttons {
        validate_max_buttons(max_buttons)?;
        window_options.max_buttons = max_buttons;
    }
    if let Some(side_buttons) = options.side_buttons {
        window_options.side_buttons = side_buttons;
    }

    let current_page = options.current.clamp(1, options.total.max(1));
    if current_page != options.current {
        log::debug!(
            "Clamped current page {} to {current_page}",
            options.current
        );
    }

    let window = compute_range_with(current_page, options.total, &window_options);
    log::debug!(
        "Window for page {current_page} of {} with {:?}: {window}",
        options.total,
        window_options
    );

    Ok(RangeReport {
        current_page,
        total_pages: options.total,
        window,
    })
}

pub fn execute_range(options: RangeOptions) -> Result<()> {
    let config = Config::load_or_default()?;
    let report = build_range_report(&options, &config)?;

    if options.json {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    if report.window.is_empty() {
        println!("No pager needed for {} page(s)", report.total_pages);
    } else {
        println!(
            "{}",
            render_pager(&report.window, report.current_page, report.total_pages)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PageWindowError;

    fn options(current: usize, total: usize) -> RangeOptions {
        RangeOptions {
            current,
            total,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_uses_config_defaults() -> Result<()> {
        let report = build_range_report(&options(5, 10), &Config::default())?;
        assert_eq!(report.window.to_string(), "1 ... 4 5 6 ... 10");
        Ok(())
    }

    #[test]
    fn test_report_clamps_current_page() -> Result<()> {
        let report = build_range_report(&options(40, 10), &Config::default())?;
        assert_eq!(report.current_page, 10);
        assert_eq!(report.window.to_string(), "1 ... 9 10");

        let report = build_range_report(&options(0, 10), &Config::default())?;
        assert_eq!(report.current_page, 1);
        Ok(())
    }

    #[test]
    fn test_report_overrides_window_options() -> Result<()> {
        let opts = RangeOptions {
            max_buttons: Some(9),
            side_buttons: Some(2),
            ..options(10, 20)
        };
        let report = build_range_report(&opts, &Config::default())?;
        assert_eq!(report.window.to_string(), "1 ... 8 9 10 11 12 ... 20");
        Ok(())
    }

    #[test]
    fn test_report_rejects_even_max_buttons() {
        let opts = RangeOptions {
            max_buttons: Some(8),
            ..options(1, 10)
        };
        assert!(matches!(
            build_range_report(&opts, &Config::default()),
            Err(PageWindowError::InvalidMaxButtons { value: 8 })
        ));
    }

    #[test]
    fn test_report_json_shape() -> Result<()> {
        let report = build_range_report(&options(1, 10), &Config::default())?;
        let json = serde_json::to_string(&report)?;
        assert_eq!(
            json,
            r#"{"current_page":1,"total_pages":10,"window":[1,2,"...",10]}"#
        );
        Ok(())
    }
}
