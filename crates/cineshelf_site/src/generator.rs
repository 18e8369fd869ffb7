//! Template-driven page rendering.

use cineshelf_core::Movie;
use cineshelf_error::{CineshelfResult, SiteError, SiteErrorKind};
use std::path::PathBuf;

/// Placeholder replaced by the site title.
const TITLE_TOKEN: &str = "__TEMPLATE_TITLE__";
/// Placeholder replaced by the rendered movie grid.
const GRID_TOKEN: &str = "__TEMPLATE_MOVIE_GRID__";

/// Renders the catalog into a static HTML page.
///
/// The template must contain the `__TEMPLATE_TITLE__` and
/// `__TEMPLATE_MOVIE_GRID__` tokens. Each is replaced verbatim: the title
/// with the configured page title, the grid with one fragment per record
/// in catalog order.
///
/// # Examples
///
/// ```no_run
/// use cineshelf_core::Movie;
/// use cineshelf_site::SiteGenerator;
///
/// # fn example() -> cineshelf_error::CineshelfResult<()> {
/// let generator =
///     SiteGenerator::new("_static/index_template.html", "index.html", "My Movie App");
/// generator.generate(&[Movie::new("Inception", 2010, 8.8, "")])?;
/// # Ok(())
/// # }
/// ```
pub struct SiteGenerator {
    template: PathBuf,
    output: PathBuf,
    site_title: String,
}

impl SiteGenerator {
    /// Create a generator rendering `template` to `output` under the given
    /// page title.
    pub fn new(
        template: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        site_title: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            output: output.into(),
            site_title: site_title.into(),
        }
    }

    /// Render the catalog and write the output document.
    #[tracing::instrument(skip(self, movies), fields(output = %self.output.display(), count = movies.len()))]
    pub fn generate(&self, movies: &[Movie]) -> CineshelfResult<()> {
        let template = std::fs::read_to_string(&self.template).map_err(|e| {
            SiteError::new(SiteErrorKind::TemplateRead(format!(
                "{}: {}",
                self.template.display(),
                e
            )))
        })?;

        let page = template
            .replace(TITLE_TOKEN, &self.site_title)
            .replace(GRID_TOKEN, &render_grid(movies));

        std::fs::write(&self.output, page).map_err(|e| {
            SiteError::new(SiteErrorKind::OutputWrite(format!(
                "{}: {}",
                self.output.display(),
                e
            )))
        })?;

        tracing::info!(
            output = %self.output.display(),
            count = movies.len(),
            "Generated catalog site"
        );
        Ok(())
    }
}

/// Concatenate one grid fragment per movie in catalog order.
fn render_grid(movies: &[Movie]) -> String {
    movies.iter().map(movie_fragment).collect()
}

/// Render one movie card.
fn movie_fragment(movie: &Movie) -> String {
    format!(
        "<div class=\"movie\">\n  <img src=\"{}\" alt=\"{} poster\">\n  <h2>{}</h2>\n  <p>Year: {}</p>\n  <p>Rating: {}</p>\n</div>\n",
        movie.poster, movie.title, movie.title, movie.year, movie.rating
    )
}
