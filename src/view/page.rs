use crate::render::escape::Escaped;
use crate::view::{HtmlRegion, Region, ViewRegions};

pub const LOADING_ID: &str = "loading";
pub const ERROR_ID: &str = "error";
pub const ERROR_TEXT_ID: &str = "error-text";
pub const NO_GAMES_ID: &str = "no-games";
pub const CONTAINER_ID: &str = "predictions-container";

const STYLESHEET: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; background: #0f172a; color: #e2e8f0; margin: 0; }
header { padding: 24px; text-align: center; }
main { max-width: 960px; margin: 0 auto; padding: 0 16px 48px; }
[hidden] { display: none !important; }
#loading, #error, #no-games { text-align: center; padding: 48px 0; }
.spinner { width: 40px; height: 40px; margin: 0 auto 16px; border: 4px solid #334155; border-top-color: #f97316; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
#error { color: #fca5a5; }
.game-card { background: #1e293b; border-radius: 12px; padding: 20px; margin-bottom: 20px; }
.game-header { display: flex; justify-content: space-between; align-items: baseline; }
.game-name { font-size: 1.1rem; margin: 0; }
.game-time { color: #94a3b8; font-size: 0.9rem; }
.teams { display: flex; align-items: center; gap: 16px; margin: 16px 0; }
.team { flex: 1; text-align: center; padding: 12px; border-radius: 8px; border: 2px solid transparent; }
.team.winner { border-color: #22c55e; background: rgba(34, 197, 94, 0.08); }
.team-logo { width: 64px; height: 64px; }
.team-label { color: #94a3b8; font-size: 0.75rem; text-transform: uppercase; }
.team-name { font-weight: 600; }
.team-abbr { color: #94a3b8; }
.team-stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 4px; margin-top: 8px; }
.stat-label { display: block; color: #64748b; font-size: 0.7rem; }
.predictor-score { margin-top: 8px; font-size: 0.85rem; }
.vs { color: #64748b; font-weight: 700; }
.confidence-bar { height: 8px; background: #334155; border-radius: 4px; overflow: hidden; margin-top: 4px; }
.confidence-fill { height: 100%; background: #f97316; }
.score-diff { margin-top: 8px; color: #94a3b8; }
"#;

/// Host document with the five regions the view layer expects
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub loading: HtmlRegion,
    pub error: HtmlRegion,
    pub error_text: HtmlRegion,
    pub no_games: HtmlRegion,
    pub container: HtmlRegion,
}

impl Page {
    pub fn new(title: &str) -> Self {
        let mut error_text = HtmlRegion::new(ERROR_TEXT_ID);
        // Nested in the error region, which controls its visibility
        error_text.show();

        Self {
            title: title.to_string(),
            loading: HtmlRegion::with_html(
                LOADING_ID,
                "<div class=\"spinner\"></div><p>Loading predictions...</p>",
            ),
            error: HtmlRegion::with_html(ERROR_ID, "<h3>Unable to load predictions</h3>"),
            error_text,
            no_games: HtmlRegion::with_html(
                NO_GAMES_ID,
                "<h3>No scheduled games found for today</h3><p>Games may have already started, or none are scheduled.</p>",
            ),
            container: HtmlRegion::new(CONTAINER_ID),
        }
    }

    /// Split the page into controller handles
    pub fn regions(&mut self) -> ViewRegions<'_, HtmlRegion> {
        ViewRegions {
            loading: &mut self.loading,
            error: &mut self.error,
            error_text: &mut self.error_text,
            no_games: &mut self.no_games,
            container: &mut self.container,
        }
    }

    /// The four mutually exclusive state regions
    pub fn view_regions(&self) -> Vec<&HtmlRegion> {
        vec![&self.loading, &self.error, &self.no_games, &self.container]
    }

    /// Id of the single visible state region, if exactly one is visible
    pub fn visible_region(&self) -> Option<&str> {
        let mut visible = self.view_regions().into_iter().filter(|r| r.is_visible());
        match (visible.next(), visible.next()) {
            (Some(region), None) => Some(region.id()),
            _ => None,
        }
    }

    /// Serialize the full HTML document
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
                "<title>{title}</title>\n",
                "<style>{style}</style>\n",
                "</head>\n",
                "<body>\n",
                "<header><h1>{title}</h1></header>\n",
                "<main>\n{loading}\n{error}\n{no_games}\n{container}\n</main>\n",
                "</body>\n",
                "</html>\n",
            ),
            title = Escaped(&self.title),
            style = STYLESHEET,
            loading = self.loading.to_html(),
            error = self.error.to_html_with(&self.error_text.to_html()),
            no_games = self.no_games.to_html(),
            container = self.container.to_html(),
        )
    }
}
