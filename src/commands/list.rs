use crate::core::{
    config::Config,
    error::{PageWindowError, Result},
    filter::filter_items,
    output::print_info,
    page_window::PageWindow,
    paginator::Paginator,
    render::{render_item_line, render_pager, render_summary},
};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Options for `page-window list`
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Items file, one item per line; stdin when absent
    pub file: Option<PathBuf>,
    pub page: usize,
    pub per_page: Option<usize>,
    pub search: Option<String>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct ListPage {
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    /// 1-based position of the first item on this page in the filtered list
    pub first_index: usize,
    pub items: Vec<String>,
    pub window: PageWindow,
}

/// Read list items, skipping blank lines
pub fn read_items(file: Option<&Path>) -> Result<Vec<String>> {
    let content = match file {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| PageWindowError::items_read_failed(path, e))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Filter, paginate and window `items` for the requested page
pub fn build_list_page(items: &[String], options: &ListOptions, config: &Config) -> Result<ListPage> {
    let per_page = options.per_page.unwrap_or(config.items_per_page);
    let filtered = filter_items(items, options.search.as_deref().unwrap_or_default());

    let mut paginator = Paginator::new(filtered.len(), per_page)?;
    paginator.set_page(options.page);

    let slice = paginator.slice();
    let page_items: Vec<String> = slice
        .apply(&filtered)
        .iter()
        .map(|item| item.to_string())
        .collect();

    Ok(ListPage {
        page: paginator.current_page(),
        total_pages: paginator.total_pages(),
        total_results: filtered.len(),
        first_index: slice.start + 1,
        items: page_items,
        window: paginator.window(&config.window_options()),
    })
}

pub fn execute_list(options: ListOptions) -> Result<()> {
    let config = Config::load_or_default()?;
    let items = read_items(options.file.as_deref())?;
    log::debug!("Read {} items", items.len());

    let page = build_list_page(&items, &options, &config)?;

    if options.json {
        println!("{}", serde_json::to_string(&page)?);
        return Ok(());
    }

    if page.total_results == 0 {
        print_info("No results");
        return Ok(());
    }

    println!();
    for (offset, item) in page.items.iter().enumerate() {
        println!("{}", render_item_line(page.first_index + offset, item));
    }
    println!();

    let summary = format!("Page {} of {}", page.page, page.total_pages);
    println!(
        "{}",
        render_summary(&summary, page.items.len(), page.total_results)
    );

    // One page of results needs no pager
    if page.total_pages > 1 {
        println!("{}", render_pager(&page.window, page.page, page.total_pages));
    }

    Ok(())
}
