//! HTML fixtures and a mock fetcher shared by the tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::utils::http::{FetchResponse, PageFetcher};

/// Current-revision profile page with every section present.
pub const PROFILE_FULL: &str = r#"<!DOCTYPE html>
<html><body>
<div class="hero-profile">
  <p class="hero-profile__nickname">"Bones"</p>
  <h1 class="hero-profile__name">Jon Jones</h1>
  <div class="hero-profile__division">
    <p class="hero-profile__division-title">Heavyweight Division</p>
    <p class="hero-profile__division-body">
      Heavyweight Division
      27-1-0 (W-L-D)
    </p>
  </div>
  <div class="hero-profile__tags">
    <p class="hero-profile__tag">#2 PFP</p>
    <p class="hero-profile__tag">Title Holder</p>
  </div>
</div>

<div class="c-bio__info">
  <div class="c-bio__info-details">
    <div class="c-bio__row--1col">
      <div class="c-bio__field"><div class="c-bio__label">Status</div><div class="c-bio__text">Active</div></div>
    </div>
    <div class="c-bio__row--3col">
      <div class="c-bio__field"><div class="c-bio__label">Hometown</div><div class="c-bio__text">Rochester, United States</div></div>
      <div class="c-bio__field"><div class="c-bio__label">Trains at</div><div class="c-bio__text">Jackson Wink MMA</div></div>
      <div class="c-bio__field"><div class="c-bio__label">Age</div><div class="c-bio__text">37</div></div>
    </div>
    <div class="c-bio__row--2col">
      <div class="c-bio__field"><div class="c-bio__label">Height</div><div class="c-bio__text">76.00</div></div>
      <div class="c-bio__field"><div class="c-bio__label">Weight</div><div class="c-bio__text">248.00</div></div>
    </div>
    <div class="c-bio__row--3col">
      <div class="c-bio__field"><div class="c-bio__label">Octagon Debut</div><div class="c-bio__text">Aug. 09, 2008</div></div>
      <div class="c-bio__field"><div class="c-bio__label">Reach</div><div class="c-bio__text">84.50</div></div>
      <div class="c-bio__field"><div class="c-bio__label">Leg reach</div><div class="c-bio__text">45.00</div></div>
    </div>
  </div>
</div>

<div class="l-overlap-group">
  <div class="l-overlap-group__item--odd">
    <div class="c-overlap--stats">
      <h2 class="c-overlap--stats__title">Striking accuracy</h2>
      <svg class="e-chart-circle"><text class="e-chart-circle__percent">58%</text></svg>
      <dl class="c-overlap__stats">
        <dt class="c-overlap__stats-text">Sig. Strikes Landed</dt>
        <dd class="c-overlap__stats-value">1463</dd>
      </dl>
      <dl class="c-overlap__stats">
        <dt class="c-overlap__stats-text">Sig. Strikes Attempted</dt>
        <dd class="c-overlap__stats-value">2526</dd>
      </dl>
    </div>
  </div>
  <div class="l-overlap-group__item--even">
    <div class="c-overlap--stats">
      <h2 class="c-overlap--stats__title">Takedown Accuracy</h2>
      <svg class="e-chart-circle"><text class="e-chart-circle__percent">44%</text></svg>
      <dl class="c-overlap__stats">
        <dt class="c-overlap__stats-text">Takedowns Landed</dt>
        <dd class="c-overlap__stats-value">36</dd>
      </dl>
      <dl class="c-overlap__stats">
        <dt class="c-overlap__stats-text">Takedowns Attempted</dt>
        <dd class="c-overlap__stats-value">95</dd>
      </dl>
    </div>
  </div>
</div>

<div class="l-container__content--narrow stats-records__outer-container">
  <div class="c-stats-group-2col">
    <div class="c-stat-compare">
      <div class="c-stat-compare__group-1">
        <div class="c-stat-compare__number">4.30</div>
        <div class="c-stat-compare__label">Sig. Str. Landed</div>
        <div class="c-stat-compare__label-suffix">Per Min</div>
      </div>
      <div class="c-stat-compare__group-2">
        <div class="c-stat-compare__number">2.22</div>
        <div class="c-stat-compare__label">Sig. Str. Absorbed</div>
        <div class="c-stat-compare__label-suffix">Per Min</div>
      </div>
    </div>
    <div class="c-stat-compare">
      <div class="c-stat-compare__group-1">
        <div class="c-stat-compare__number">1.85</div>
        <div class="c-stat-compare__label">Takedown avg</div>
        <div class="c-stat-compare__label-suffix">Per 15 Min</div>
      </div>
      <div class="c-stat-compare__group-2">
        <div class="c-stat-compare__number">0.44</div>
        <div class="c-stat-compare__label">Submission avg</div>
        <div class="c-stat-compare__label-suffix">Per 15 Min</div>
      </div>
    </div>
  </div>
  <div class="c-stats-group-2col">
    <div class="c-stat-compare">
      <div class="c-stat-compare__group-1">
        <div class="c-stat-compare__number">
          64
          %
        </div>
        <div class="c-stat-compare__label">Sig. Str. Defense</div>
      </div>
      <div class="c-stat-compare__group-2">
        <div class="c-stat-compare__number">95%</div>
        <div class="c-stat-compare__label">Takedown Defense</div>
      </div>
    </div>
    <div class="c-stat-compare">
      <div class="c-stat-compare__group-1">
        <div class="c-stat-compare__number">0.22</div>
        <div class="c-stat-compare__label">Knockdown Ratio</div>
      </div>
      <div class="c-stat-compare__group-2">
        <div class="c-stat-compare__number">15:28</div>
        <div class="c-stat-compare__label">Average fight time</div>
      </div>
    </div>
  </div>
  <div class="c-stats-group-3col">
    <div class="c-stats-group-3col__item">
      <div class="c-stat-3bar">
        <h2 class="c-stat-3bar__title">Sig. Str. By Position</h2>
        <div class="c-stat-3bar__group"><div class="c-stat-3bar__label">Standing</div><div class="c-stat-3bar__value">953 (65%)</div></div>
        <div class="c-stat-3bar__group"><div class="c-stat-3bar__label">Clinch</div><div class="c-stat-3bar__value">248 (17%)</div></div>
        <div class="c-stat-3bar__group"><div class="c-stat-3bar__label">Ground</div><div class="c-stat-3bar__value">262 (18%)</div></div>
      </div>
    </div>
    <div class="c-stats-group-3col__item">
      <div class="c-stat-body">
        <div class="c-stat-body__title"><h2 class="e-t5">Sig. Str. by target</h2></div>
        <svg class="c-stat-body__svg">
          <text id="e-stat-body_x5F__x5F_head_value">687</text>
          <text id="e-stat-body_x5F__x5F_body_value">359</text>
          <text id="e-stat-body_x5F__x5F_leg_value">417</text>
        </svg>
      </div>
    </div>
    <div class="c-stats-group-3col__item">
      <div class="c-stat-3bar">
        <h2 class="c-stat-3bar__title">Win by Way</h2>
        <div class="c-stat-3bar__group"><div class="c-stat-3bar__label">KO/TKO</div><div class="c-stat-3bar__value">10 (37%)</div></div>
        <div class="c-stat-3bar__group"><div class="c-stat-3bar__label">DEC</div><div class="c-stat-3bar__value">7 (26%)</div></div>
        <div class="c-stat-3bar__group"><div class="c-stat-3bar__label">SUB</div><div class="c-stat-3bar__value">6 (22%)</div></div>
      </div>
    </div>
  </div>
</div>
</body></html>
"#;

/// Legacy-revision profile: headline suffix, a single full-width grappling
/// card, no biography and no metrics.
pub const PROFILE_LEGACY_GRAPPLING_ONLY: &str = r#"<!DOCTYPE html>
<html><body>
<div class="c-hero">
  <div class="field field-name-nickname">"The Notorious"</div>
  <h1 class="c-hero__headline">Conor McGregor</h1>
  <div class="c-hero__headline-suffix tz-change-inner">
    #12 Lightweight Division • Active
    22-6-0 (W-L-D)
  </div>
</div>
<div class="l-overlap-group">
  <div class="l-overlap-group__item--odd--full-width">
    <div class="c-overlap--stats">
      <h2 class="c-overlap--stats__title">
        Grappling   Accuracy
      </h2>
      <svg class="e-chart-circle"><text class="e-chart-circle__percent">56%</text></svg>
      <dl class="c-overlap__stats"><dd class="c-overlap__stats-value"></dd></dl>
      <dl class="c-overlap__stats"><dd class="c-overlap__stats-value">9</dd></dl>
    </div>
  </div>
</div>
</body></html>
"#;

/// Current-revision profile of an unranked athlete with a single
/// full-width striking card and a metrics section missing its last row.
pub const PROFILE_UNRANKED_PARTIAL_METRICS: &str = r#"<!DOCTYPE html>
<html><body>
<div class="hero-profile">
  <h1 class="hero-profile__name">Andrew Newcomer</h1>
  <div class="hero-profile__tags">
    <p class="hero-profile__tag">Fighter</p>
  </div>
</div>
<div class="l-overlap-group">
  <div class="l-overlap-group__item--odd--full-width">
    <div class="c-overlap--stats">
      <h2 class="c-overlap--stats__title">Striking accuracy</h2>
      <svg class="e-chart-circle"><text class="e-chart-circle__percent">41%</text></svg>
      <dl class="c-overlap__stats"><dd class="c-overlap__stats-value">30</dd></dl>
      <dl class="c-overlap__stats"><dd class="c-overlap__stats-value">73</dd></dl>
    </div>
  </div>
</div>
<div class="l-container__content--narrow stats-records__outer-container">
  <div class="c-stats-group-2col">
    <div class="c-stat-compare">
      <div class="c-stat-compare__group-1">
        <div class="c-stat-compare__label">Sig. Str. Landed</div>
        <div class="c-stat-compare__label-suffix">Per Min</div>
      </div>
      <div class="c-stat-compare__group-2">
        <div class="c-stat-compare__number">3.10</div>
        <div class="c-stat-compare__label">Sig. Str. Absorbed</div>
        <div class="c-stat-compare__label-suffix">Per Min</div>
      </div>
    </div>
  </div>
</div>
</body></html>
"#;

/// Biography container whose field is missing its value element.
pub const PROFILE_MALFORMED_BIO: &str = r#"<html><body>
<div class="c-bio__info-details">
  <div class="c-bio__row--1col">
    <div class="c-bio__field"><div class="c-bio__label">Status</div><div class="c-bio__text">Active</div></div>
  </div>
  <div class="c-bio__row--1col">
    <div class="c-bio__field"><div class="c-bio__label">Hometown</div></div>
  </div>
</div>
</body></html>
"#;

/// Build a rankings page. Each grouping is `(header, titleholder, contenders)`;
/// contender names are `"{header} Contender {n}"`.
pub fn rankings_page(groupings: &[(&str, Option<&str>, usize)]) -> String {
    let mut html = String::from("<!DOCTYPE html><html><body><div class=\"view-content\">");
    for (header, titleholder, contenders) in groupings {
        html.push_str("<div class=\"view-grouping\">");
        html.push_str(&format!(
            "<div class=\"view-grouping-header\">{header}</div>"
        ));
        html.push_str("<div class=\"view-grouping-content\"><table><caption>");
        if let Some(name) = titleholder {
            html.push_str(&format!(
                "<div class=\"rankings--athlete--champion clearfix\"><div class=\"info\">\
                 <h5><div class=\"views-row\"><a href=\"#\">{name}</a></div></h5>\
                 <h6><span class=\"text\">Champion</span></h6></div></div>"
            ));
        }
        html.push_str("</caption><tbody>");
        for n in 1..=*contenders {
            html.push_str(&format!(
                "<tr><td class=\"views-field views-field-weight-class-rank\">{n}</td>\
                 <td class=\"views-field views-field-title\"><div class=\"views-row\">\
                 <a href=\"#\">{header} Contender {n}</a></div></td></tr>"
            ));
        }
        html.push_str("</tbody></table></div></div>");
    }
    html.push_str("</div></body></html>");
    html
}

/// In-memory `PageFetcher`: serves registered pages with 200, everything
/// else with 404 and an empty body. Tracks concurrent in-flight requests.
pub struct MockFetcher {
    pages: HashMap<String, String>,
    delay_ms: fn(&str) -> u64,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            delay_ms: |_| 1,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    /// Per-URL simulated latency.
    pub fn with_delay(mut self, delay_ms: fn(&str) -> u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Highest number of requests observed in flight at once.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResponse {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let delay = (self.delay_ms)(url);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(body) => FetchResponse {
                status: 200,
                body: body.clone(),
            },
            None => FetchResponse {
                status: 404,
                body: String::new(),
            },
        }
    }
}
