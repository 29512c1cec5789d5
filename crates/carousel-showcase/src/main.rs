#![forbid(unsafe_code)]

//! Showcase binary: runs a scripted interaction against all four carousels.
//!
//! Args are parsed manually to keep the binary lean. `RUST_LOG` controls
//! engine tracing (e.g. `RUST_LOG=carousel_engine=debug`).

use std::env;
use std::process;

use carousel_core::{ResizeEvent, SlideTiers, TouchEvent};
use carousel_engine::CarouselConfig;
use carousel_showcase::content;
use carousel_showcase::section::Section;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
carousel-showcase — headless run of the TasteLagos carousels

USAGE:
    carousel-showcase [OPTIONS]

OPTIONS:
    --width=N       Initial viewport width in pixels (default: 1280)
    --help, -h      Show this help message
    --version, -V   Show version
";

struct Opts {
    width: u32,
}

fn parse_opts() -> Opts {
    let mut width = 1280;
    for arg in env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--width=") {
            match value.parse() {
                Ok(w) => width = w,
                Err(_) => {
                    eprintln!("invalid --width value: {value}");
                    process::exit(2);
                }
            }
        } else if arg == "--help" || arg == "-h" {
            print!("{HELP_TEXT}");
            process::exit(0);
        } else if arg == "--version" || arg == "-V" {
            println!("carousel-showcase {VERSION}");
            process::exit(0);
        } else {
            eprintln!("unknown option: {arg}\n\n{HELP_TEXT}");
            process::exit(2);
        }
    }
    Opts { width }
}

fn print_all<A, B, C, D>(
    label: &str,
    areas: &Section<'_, A>,
    community: &Section<'_, B>,
    featured: &Section<'_, C>,
    nearby: &Section<'_, D>,
) {
    println!("\n== {label} ==");
    for status in [
        areas.status(),
        community.status(),
        featured.status(),
        nearby.status(),
    ] {
        println!("  {status}");
    }
}

fn main() {
    let opts = parse_opts();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cards = CarouselConfig::new();
    let grid = CarouselConfig::new().tiers(SlideTiers::grid());

    let mut areas = Section::new("Explore Lagos by Area", content::lagos_areas(), cards, opts.width);
    let mut community = Section::new(
        "Meet the Community",
        content::community_members(),
        cards,
        opts.width,
    );
    let mut featured = Section::new(
        "Featured Restaurants",
        content::featured_restaurants(),
        grid,
        opts.width,
    );
    let mut nearby = Section::new(
        "Restaurants Near You",
        content::nearby_restaurants(),
        grid,
        opts.width,
    );

    print_all("initial layout", &areas, &community, &featured, &nearby);

    // Arrow clicks.
    areas.next();
    featured.next();
    nearby.next();
    print_all("after next-arrow clicks", &areas, &community, &featured, &nearby);

    // Dot jumps.
    community.goto(community.dots().total.saturating_sub(1));
    featured.goto(0);
    print_all("after dot jumps", &areas, &community, &featured, &nearby);

    // A touch swipe on the areas strip.
    areas.handle_event(TouchEvent::start(350.0).into());
    areas.handle_event(TouchEvent::moved(120.0).into());
    areas.handle_event(TouchEvent::end().into());
    print_all("after swipe on areas", &areas, &community, &featured, &nearby);

    // Resize across a breakpoint: every carousel reconciles to slide 0.
    let resize = ResizeEvent::new(375);
    areas.handle_event(resize.into());
    community.handle_event(resize.into());
    featured.handle_event(resize.into());
    nearby.handle_event(resize.into());
    print_all("after resize to 375px", &areas, &community, &featured, &nearby);

    areas.report();
    community.report();
    featured.report();
    nearby.report();
}
