// Example: random mix of updates and short range queries, checked against a plain Vec.
use segment_tree::SegmentTree;

struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 11
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

fn main() {
    let n = 5000usize;
    let mut rng = Lcg(0x5EED);
    let mut data: Vec<i64> = (0..n).map(|_| rng.below(1001) as i64).collect();
    let mut tree = SegmentTree::build(&data);

    let mut updates = 0usize;
    let mut queries = 0usize;
    for _ in 0..1000 {
        if rng.below(2) == 0 {
            let idx = rng.below(n as u64) as usize;
            let value = rng.below(1001) as i64;
            tree.point_update(idx, value).expect("idx < n");
            data[idx] = value;
            updates += 1;
        } else {
            let l = rng.below(n as u64) as usize;
            let r = l + 1 + rng.below(100.min(n - l) as u64) as usize;
            let got = tree.range_sum(l, r).expect("l < r <= n");
            assert_eq!(got, data[l..r].iter().sum::<i64>());
            queries += 1;
        }
    }
    println!("random operations completed: updates={updates} queries={queries}");
}
