use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use ordered_bst::OrderedMap;

const RAND_SEED: u64 = 123;

#[inline(never)]
fn create_map() -> OrderedMap {
    let mut keys = (0..100000).collect::<Vec<_>>();
    keys.shuffle(&mut rand::thread_rng());

    let map = keys.into_iter().map(|k| (k, k * 2)).collect::<OrderedMap>();

    log::info!("size: {} height: {}", map.size(), map.height());
    map
}

#[inline(never)]
fn erase_map(map: &mut OrderedMap) {
    let mut keys = map.keys().collect::<Vec<_>>();
    let mut r = StdRng::seed_from_u64(RAND_SEED);
    keys.shuffle(&mut r);

    // erase only a tenth, every lossy erase may take whole subtrees with it
    for k in keys.iter().take(keys.len() / 10) {
        map.erase(*k);
    }
    log::info!("size: {} height: {}", map.size(), map.height());
    println!("{:#?}", map.statistic());
}

fn main() {
    env_logger::init();

    let mut map = create_map();
    erase_map(&mut map);
}
