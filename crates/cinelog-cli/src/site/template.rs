//! Embedded website template.
//!
//! Compiled into the binary so `cinelog website` works from any
//! directory without a template file on disk.

/// Page skeleton. `__TEMPLATE_TITLE__` and `__TEMPLATE_MOVIE_GRID__`
/// are replaced at generation time.
pub const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8"/>
    <title>__TEMPLATE_TITLE__</title>
    <link rel="stylesheet" href="style.css"/>
</head>
<body>
<div class="list-movies-title">
    <h1>__TEMPLATE_TITLE__</h1>
</div>
<div>
    <ol class="movie-grid">
__TEMPLATE_MOVIE_GRID__
    </ol>
</div>
</body>
</html>
"#;

/// Stylesheet written next to the page.
pub const STYLE_SHEET: &str = r#"* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
    background: #f4f1ea;
    color: #352f2b;
}

.list-movies-title {
    background: #352f2b;
    color: #f4f1ea;
    padding: 20px 40px;
}

.list-movies-title h1 {
    margin: 0;
    font-weight: 500;
}

.movie-grid {
    list-style: none;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
    gap: 30px;
    padding: 40px;
    margin: 0;
}

.movie {
    display: flex;
    flex-direction: column;
    gap: 6px;
}

.movie-poster,
.movie-poster-missing {
    width: 100%;
    aspect-ratio: 2 / 3;
    object-fit: cover;
    border-radius: 4px;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.25);
}

.movie-poster-missing {
    display: flex;
    align-items: center;
    justify-content: center;
    background: #d8d2c4;
    color: #7a7265;
    font-size: 0.85em;
}

.movie-title {
    font-weight: 600;
}

.movie-year {
    color: #7a7265;
    font-size: 0.9em;
}
"#;
