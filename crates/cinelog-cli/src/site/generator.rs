use anyhow::{Context, Result};
use std::path::Path;

use cinelog_core::model::Movie;

use super::template::{INDEX_TEMPLATE, STYLE_SHEET};

const PAGE_TITLE: &str = "My Movie Collection";

/// Escape text for interpolation into HTML content or attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render one movie as a grid card.
fn render_card(movie: &Movie) -> String {
    let title = escape_html(&movie.title);
    let poster = match &movie.poster_url {
        Some(url) => format!(
            r#"<img class="movie-poster" src="{}" alt="{}"/>"#,
            escape_html(url),
            title
        ),
        None => r#"<div class="movie-poster-missing">No poster</div>"#.to_string(),
    };

    format!(
        r#"        <li class="movie-grid li">
            <div class="movie">
                {poster}
                <div class="movie-title">{title}</div>
                <div class="movie-year">{year}</div>
            </div>
        </li>
"#,
        poster = poster,
        title = title,
        year = movie.year,
    )
}

/// Render the full page from the embedded template.
pub fn render_page(movies: &[Movie]) -> String {
    let grid: String = movies.iter().map(render_card).collect();
    INDEX_TEMPLATE
        .replace("__TEMPLATE_TITLE__", PAGE_TITLE)
        .replace("__TEMPLATE_MOVIE_GRID__", grid.trim_end())
}

/// Write `movies.html` and `style.css` into `out_dir`, creating it if
/// needed. Returns the path of the generated page.
pub fn write_site(out_dir: &Path, movies: &[Movie]) -> Result<std::path::PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let page_path = out_dir.join("movies.html");
    std::fs::write(&page_path, render_page(movies))
        .with_context(|| format!("Failed to write {}", page_path.display()))?;
    std::fs::write(out_dir.join("style.css"), STYLE_SHEET)
        .context("Failed to write style.css")?;

    Ok(page_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Fast & Furious"), "Fast &amp; Furious");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_render_card_with_poster() {
        let movie =
            Movie::new("The Matrix", 1999, 8.7).with_poster_url("https://example.com/m.jpg");
        let card = render_card(&movie);
        assert!(card.contains(r#"src="https://example.com/m.jpg""#));
        assert!(card.contains("The Matrix"));
        assert!(card.contains("1999"));
    }

    #[test]
    fn test_render_card_without_poster() {
        let movie = Movie::new("Obscure Short", 1921, 6.0);
        let card = render_card(&movie);
        assert!(card.contains("movie-poster-missing"));
        assert!(!card.contains("<img"));
    }

    #[test]
    fn test_render_page_replaces_placeholders() {
        let movies = vec![Movie::new("Solaris", 1972, 8.0)];
        let page = render_page(&movies);
        assert!(!page.contains("__TEMPLATE_TITLE__"));
        assert!(!page.contains("__TEMPLATE_MOVIE_GRID__"));
        assert!(page.contains("Solaris"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let movies = vec![Movie::new("Kill <Bill> & Co", 2003, 8.2)];
        let page = render_page(&movies);
        assert!(page.contains("Kill &lt;Bill&gt; &amp; Co"));
        assert!(!page.contains("Kill <Bill>"));
    }

    #[test]
    fn test_write_site() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("site");
        let movies = vec![Movie::new("Alien", 1979, 8.5)];

        let page = write_site(&out, &movies).unwrap();
        assert!(page.exists());
        assert!(out.join("style.css").exists());

        let html = std::fs::read_to_string(page).unwrap();
        assert!(html.contains("Alien"));
    }
}
