use std::{cell::RefCell, rc::Rc};

use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::{
    animation::clock::AnimationClock, palette::registry::PaletteRegistry,
    scene::recorder::Recorder,
};

struct Tagged {
    tag: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl Drawable for Tagged {
    fn update(&mut self, _frame: &mut FrameCtx<'_>) -> EaselResult<()> {
        self.log.borrow_mut().push(format!("update:{}", self.tag));
        Ok(())
    }

    fn draw(&self, _ctx: &mut dyn RenderContext, _params: &DrawParams) -> EaselResult<()> {
        self.log.borrow_mut().push(format!("draw:{}", self.tag));
        Ok(())
    }

    fn animate_slow(&mut self, _source: &mut ColorSource<'_>) -> EaselResult<()> {
        self.log.borrow_mut().push(format!("slow:{}", self.tag));
        Ok(())
    }
}

fn node(tag: &'static str, log: &Rc<RefCell<Vec<String>>>) -> NodeRef {
    Rc::new(RefCell::new(Tagged {
        tag,
        log: Rc::clone(log),
    }))
}

fn run(tree: &Composite) {
    let reg = PaletteRegistry::builtin();
    let mut rng = StdRng::seed_from_u64(0);
    let clock = AnimationClock::new();
    let mut frame = FrameCtx {
        clock: &clock,
        colors: ColorSource {
            registry: &reg,
            rng: &mut rng,
        },
    };
    tree.traverse(&mut frame, &mut Recorder::new(), &DrawParams::default())
        .unwrap();
}

#[test]
fn push_get_pop_count_with_rows() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut tree = Composite::new();
    assert!(tree.is_empty());
    tree.push(node("a", &log), None);
    tree.push(node("b", &log), Some(2));
    tree.push(node("c", &log), Some(2));

    assert_eq!(tree.count(), 3);
    assert_eq!(tree.rows(), 3);
    assert_eq!(tree.row_len(1), 0);
    assert!(tree.get(Index::Cell { row: 2, col: 1 }).is_some());
    assert!(tree.get(Index::Cell { row: 1, col: 0 }).is_none());
    assert!(tree.get(Index::Flat(3)).is_none());

    let c = tree.get(Index::Cell { row: 2, col: 1 }).unwrap();
    let popped = tree.pop(Some(2)).unwrap();
    assert!(Rc::ptr_eq(&c, &popped));
    assert!(tree.pop(Some(7)).is_none());
    assert_eq!(tree.count(), 2);
}

#[test]
fn traversal_updates_then_draws_in_insertion_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut tree = Composite::new();
    tree.push(node("bg", &log), None);
    tree.push(node("x", &log), None);
    run(&tree);
    assert_eq!(
        *log.borrow(),
        vec!["update:bg", "draw:bg", "update:x", "draw:x"]
    );
}

#[test]
fn nested_composites_recurse() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut inner = Composite::new();
    inner.push(node("r0", &log), Some(0));
    inner.push(node("r1", &log), Some(1));

    let mut tree = Composite::new();
    tree.push(Rc::new(RefCell::new(inner)), None);
    tree.push(node("top", &log), None);
    run(&tree);
    assert_eq!(
        *log.borrow(),
        vec![
            "update:r0",
            "update:r1",
            "draw:r0",
            "draw:r1",
            "update:top",
            "draw:top"
        ]
    );
}

#[test]
fn animate_slow_reaches_every_node() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut tree = Composite::new();
    tree.push(node("a", &log), None);
    tree.push(node("b", &log), Some(1));
    let reg = PaletteRegistry::builtin();
    let mut rng = StdRng::seed_from_u64(0);
    tree.animate_slow(&mut ColorSource {
        registry: &reg,
        rng: &mut rng,
    })
    .unwrap();
    assert_eq!(*log.borrow(), vec!["slow:a", "slow:b"]);
}

#[test]
fn busy_node_is_a_borrow_error_not_a_panic() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let busy = node("busy", &log);
    let mut inner = Composite::new();
    inner.push(Rc::clone(&busy), None);
    let mut tree = Composite::new();
    tree.push(node("ok", &log), None);
    tree.push(Rc::new(RefCell::new(inner)), None);

    let _held = busy.borrow_mut();
    let err = tree
        .draw(&mut Recorder::new(), &DrawParams::default())
        .unwrap_err();
    assert!(matches!(err, EaselError::Borrow(_)));
    assert_eq!(*log.borrow(), vec!["draw:ok"]);

    let reg = PaletteRegistry::builtin();
    let mut rng = StdRng::seed_from_u64(0);
    let err = tree
        .animate_slow(&mut ColorSource {
            registry: &reg,
            rng: &mut rng,
        })
        .unwrap_err();
    assert!(matches!(err, EaselError::Borrow(_)));
}
