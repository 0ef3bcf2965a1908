use carousel::{
    Axis, BusyPolicy, CarouselOptions, DEFAULT_AUTO_PLAY_INTERVAL_MS, Easing, Strategy,
};

/// Columns shown by [`Preset::GridCarousel`].
const GRID_COLUMNS: usize = 3;
/// Transition used by the button/dot driven carousels.
const MANUAL_TRANSITION_SEC: f32 = 0.4;

/// The carousel variants a page typically ships, as ready-made options.
///
/// Every preset is a starting point; adjust it with the `CarouselOptions::with_*` builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Preset {
    /// Full-width slides toggled in place with a content cross-fade; auto-plays.
    HeroSlider,
    /// Endless one-item-per-view list, drag and dots only.
    TourCarousel,
    /// Endless three-per-view grid with dots at 0/3/6, momentum and auto-play.
    ReviewCarousel,
    /// Bounded list driven by buttons and dots.
    ManualCarousel,
    /// Bounded multi-column list.
    GridCarousel,
    /// Vertical news ticker that wraps back to the top.
    VerticalTicker,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::HeroSlider,
        Preset::TourCarousel,
        Preset::ReviewCarousel,
        Preset::ManualCarousel,
        Preset::GridCarousel,
        Preset::VerticalTicker,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::HeroSlider => "hero-slider",
            Self::TourCarousel => "tour-carousel",
            Self::ReviewCarousel => "review-carousel",
            Self::ManualCarousel => "manual-carousel",
            Self::GridCarousel => "grid-carousel",
            Self::VerticalTicker => "vertical-ticker",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn options(self) -> CarouselOptions {
        match self {
            Self::HeroSlider => CarouselOptions::new(Strategy::fading())
                .with_auto_play(true)
                .with_auto_play_interval_ms(DEFAULT_AUTO_PLAY_INTERVAL_MS),
            Self::TourCarousel => CarouselOptions::new(Strategy::recycling(Axis::Horizontal)),
            Self::ReviewCarousel => CarouselOptions::new(Strategy::recycling(Axis::Horizontal))
                .with_items_per_view(3)
                .with_auto_play(true)
                .with_inertia(0.95, 0.5)
                .with_busy_policy(BusyPolicy::Defer)
                .with_indicator_positions([0usize, 3, 6]),
            Self::ManualCarousel => CarouselOptions::new(Strategy::bounded(Axis::Horizontal))
                .with_transition(MANUAL_TRANSITION_SEC, Easing::Ease),
            Self::GridCarousel => CarouselOptions::new(Strategy::bounded(Axis::Horizontal))
                .with_items_per_view(GRID_COLUMNS)
                .with_transition(MANUAL_TRANSITION_SEC, Easing::Ease),
            Self::VerticalTicker => CarouselOptions::new(Strategy::wrapping(Axis::Vertical))
                .with_auto_play(true),
        }
    }
}
