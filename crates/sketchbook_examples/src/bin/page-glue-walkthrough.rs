use std::cell::RefCell;
use std::rc::Rc;

use sketchbook_page::prelude::*;
use tracing::info;

fn main() -> anyhow::Result<()> {
    sketchbook_examples::init_tracing();

    let mut doc = Document::new();
    doc.push(Element::new("a").with_attr("href", "/sketches"));
    doc.push(Element::new("a").with_attr("href", "https://p5js.org"));
    doc.push(Element::new("a"));
    doc.push(Element::new("div").with_classes("image-row image-row-noise"));
    doc.push(Element::new("div").with_classes("image-row image-row-grids"));
    let frame = doc.push(Element::new("iframe").with_attr("data-src", "/editor/noise1d"));

    let loader: Rc<RefCell<Option<LazyLoader>>> = Rc::new(RefCell::new(None));
    let mut queue = ReadyQueue::new();

    queue.on_ready(&mut doc, |d| {
        let n = normalize_link_targets(d);
        info!("{} links pinned to the current tab", n);
    });
    queue.on_ready(&mut doc, |d| {
        let mut factory = FnFactory::new(|selector: &str, options: &LightboxOptions| {
            info!("lightbox for '{}' ({:?})", selector, options);
        });
        init_galleries(d, &mut factory, &LightboxOptions::default());
    });
    {
        let loader = Rc::clone(&loader);
        queue.on_ready(&mut doc, move |d| {
            *loader.borrow_mut() = Some(LazyLoader::attach(d));
        });
    }
    queue.dispatch(&mut doc);

    if let Some(loader) = loader.borrow_mut().as_mut() {
        // Scrolling the frame into view: a sliver, then fully visible.
        for ratio in [0.005, 0.2, 1.0] {
            let loaded =
                loader.handle_intersections(&mut doc, &[IntersectionEntry::new(frame, ratio)]);
            info!("ratio {:.3}: loaded {:?}", ratio, loaded);
        }
    }
    info!("iframe src = {:?}", doc.get(frame)?.attribute("src"));

    Ok(())
}
