use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    Route,
    components::marquee::{Landmark, Marquee},
};

static LANDMARKS: [Landmark; 13] = [
    Landmark {
        name: "Chichen Itza",
        src: "/frontend/dist/hero/chichen.webp",
        link: "https://en.wikipedia.org/wiki/Chichen_Itza",
    },
    Landmark {
        name: "Christ the Redeemer",
        src: "/frontend/dist/hero/christ.webp",
        link: "https://en.wikipedia.org/wiki/Christ_the_Redeemer_(statue)",
    },
    Landmark {
        name: "Colosseum",
        src: "/frontend/dist/hero/colosseum.webp",
        link: "https://en.wikipedia.org/wiki/Colosseum",
    },
    Landmark {
        name: "Great Pyramid of Giza",
        src: "/frontend/dist/hero/giza.webp",
        link: "https://en.wikipedia.org/wiki/Great_Pyramid_of_Giza",
    },
    Landmark {
        name: "Machu Picchu",
        src: "/frontend/dist/hero/peru.webp",
        link: "https://en.wikipedia.org/wiki/Machu_Picchu",
    },
    Landmark {
        name: "Taj Mahal",
        src: "/frontend/dist/hero/taj.webp",
        link: "https://en.wikipedia.org/wiki/Taj_Mahal",
    },
    Landmark {
        name: "India Gate",
        src: "/frontend/dist/hero/india.webp",
        link: "https://en.wikipedia.org/wiki/India_Gate",
    },
    Landmark {
        name: "Great Wall of China",
        src: "/frontend/dist/hero/wall.webp",
        link: "https://en.wikipedia.org/wiki/Great_Wall_of_China",
    },
    Landmark {
        name: "Eiffel Tower",
        src: "/frontend/dist/hero/tower.webp",
        link: "https://en.wikipedia.org/wiki/Eiffel_Tower",
    },
    Landmark {
        name: "Statue of Liberty",
        src: "/frontend/dist/hero/liberty.webp",
        link: "https://en.wikipedia.org/wiki/Statue_of_Liberty",
    },
    Landmark {
        name: "Sydney Opera House",
        src: "/frontend/dist/hero/sydney.webp",
        link: "https://en.wikipedia.org/wiki/Sydney_Opera_House",
    },
    Landmark {
        name: "Mount Everest",
        src: "/frontend/dist/hero/everest.webp",
        link: "https://en.wikipedia.org/wiki/Mount_Everest",
    },
    Landmark {
        name: "Stonehenge",
        src: "/frontend/dist/hero/stonehenge.webp",
        link: "https://en.wikipedia.org/wiki/Stonehenge",
    },
];

/// Splits the landmarks into two marquee rows, the first one taking the extra image.
pub fn marquee_rows(images: &[Landmark]) -> (&[Landmark], &[Landmark]) {
    images.split_at(images.len().div_ceil(2))
}

/// Marquees top to bottom with their direction: the second half scrolls forward
/// on top, the first half scrolls in reverse below it.
pub fn marquee_layout(images: &[Landmark]) -> [(&[Landmark], bool); 2] {
    let (first_row, second_row) = marquee_rows(images);
    [(second_row, false), (first_row, true)]
}

#[function_component]
pub fn Hero() -> Html {

    html! {
        <section class="hero">
            <div class="hero-content">
                <h2 class="hero-line">{"Embark on Electrifying"}</h2>
                <h2 class="hero-line">{"Adventures with"}</h2>
                <h1 class="hero-title">{"PocketTraveller"}</h1>
                <p class="hero-subtitle">{"Your trusted AI travel agent and adventure guide."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::PlanTrip} classes="button button-primary">
                        {"Let's Plan a Trip"}
                    </Link<Route>>
                    <a class="button button-secondary" href="https://buymeacoffee.com/acobapaulf" target="_blank" rel="noopener noreferrer">
                        {"Buy Me a Coffee"}
                    </a>
                </div>
            </div>
            { for marquee_layout(&LANDMARKS).into_iter().map(|(images, reverse)| html! {
                <Marquee {images} {reverse} />
            }) }
        </section>
    }
}
