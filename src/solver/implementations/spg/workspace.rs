use crate::algebra::*;

/// Work vectors for a single SPG run.
///
/// Every buffer is a clone of the starting point, so all of them share its
/// shape.  Nothing is allocated once the main loop has started.

#[derive(Debug, Clone)]
pub(crate) struct SpgWorkspace<V> {
    pub x_prev: V,
    pub g: V,
    pub g_prev: V,
    pub d: V,
    pub s: V,
    pub y: V,
    pub pg: V,
    pub xbest: V,
    // nonmonotone window of recent objective values.  Empty when mem == 1
    pub hist: Vec<f64>,
}

impl<V> SpgWorkspace<V>
where
    V: DenseVector + Clone,
{
    pub fn new(x: &V, mem: usize) -> Self {
        let hist = if mem > 1 {
            vec![f64::NEG_INFINITY; mem]
        } else {
            Vec::new()
        };

        Self {
            x_prev: x.clone(),
            g: x.clone(),
            g_prev: x.clone(),
            d: x.clone(),
            s: x.clone(),
            y: x.clone(),
            pg: x.clone(),
            xbest: x.clone(),
            hist,
        }
    }

    /// Reference value for the line search acceptance test at iteration
    /// `iter` with current objective `f`.
    pub fn update_fmax(&mut self, iter: u32, f: f64) -> f64 {
        if self.hist.is_empty() {
            return f;
        }
        let m = self.hist.len();
        self.hist[(iter as usize) % m] = f;
        self.hist.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[test]
fn test_update_fmax() {
    let x = vec![0.0; 3];

    // monotone
    let mut ws = SpgWorkspace::new(&x, 1);
    assert!(ws.hist.is_empty());
    assert_eq!(ws.update_fmax(0, 5.0), 5.0);
    assert_eq!(ws.update_fmax(1, 2.0), 2.0);

    // window of three, oldest values drop out
    let mut ws = SpgWorkspace::new(&x, 3);
    assert_eq!(ws.update_fmax(0, 5.0), 5.0);
    assert_eq!(ws.update_fmax(1, 4.0), 5.0);
    assert_eq!(ws.update_fmax(2, 3.0), 5.0);
    assert_eq!(ws.update_fmax(3, 2.0), 4.0);
    assert_eq!(ws.update_fmax(4, 1.0), 3.0);
}
