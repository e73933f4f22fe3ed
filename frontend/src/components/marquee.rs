use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub name: &'static str,
    pub src: &'static str,
    pub link: &'static str,
}

#[derive(PartialEq, Properties, Clone)]
pub struct MarqueeProps {
    pub images: &'static [Landmark],
    #[prop_or_default]
    pub reverse: bool,
    #[prop_or(true)]
    pub pause_on_hover: bool,
    /// How many copies of the image set the track holds.
    #[prop_or(2)]
    pub repeat: usize,
}

/// The image set laid out `repeat` times back to back, so the track can scroll by
/// one copy and loop without a visible seam.
pub fn repeated(images: &[Landmark], repeat: usize) -> impl Iterator<Item = &Landmark> {
    images.iter().cycle().take(images.len() * repeat)
}

#[function_component]
pub fn Marquee(props: &MarqueeProps) -> Html {
    let classes = classes!(
        "marquee-track",
        props.reverse.then_some("marquee-reverse"),
        props.pause_on_hover.then_some("marquee-pause-on-hover"),
    );

    html! {
        <div class="marquee">
            <div class={classes}>
                { for repeated(props.images, props.repeat).map(|landmark| html! {
                    <a href={landmark.link} target="_blank" rel="noopener noreferrer">
                        <img class="marquee-image" src={landmark.src} alt={landmark.name} />
                    </a>
                }) }
            </div>
        </div>
    }
}
