//! Known encoded polylines around Helsinki and Espoo.

/// A route with its points and canonical encoding.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: &'static str,
    pub points: &'static [(f64, f64)],
    pub encoded: &'static str,
}

impl Route {
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.points.to_vec()
    }
}

pub const PASILA: Route = Route {
    name: "Pasila",
    points: &[
        (60.19731, 24.92249),
        (60.19381, 24.92600),
        (60.19112, 24.91613),
        (60.19385, 24.90429),
        (60.20170, 24.89940),
    ],
    encoded: "ehlnJqtbwCzT}TxOt|@aP~hAap@p]",
};

pub const OTANIEMI: Route = Route {
    name: "Otaniemi",
    points: &[
        (60.22353, 24.78627),
        (60.22191, 24.78679),
        (60.21961, 24.78610),
        (60.21692, 24.78782),
    ],
    encoded: "alqnJeahvCbIgBjMhCxOwI",
};

pub const KALLIO_LOOP: Route = Route {
    name: "Kallio loop",
    points: &[
        (60.17345, 24.9309),
        (60.16662, 24.94051),
        (60.1685, 24.95304),
        (60.1714, 24.95338),
        (60.17482, 24.95115),
        (60.17951, 24.95029),
        (60.18336, 24.9527),
        (60.1854, 24.96231),
        (60.18651, 24.95356),
        (60.18523, 24.94102),
        (60.18873, 24.93622),
        (60.19675, 24.93759),
    ],
    encoded: "asgnJcidwCti@a{@wJimAcQcAkT|Li\\jDaWaNwKa{@}Etu@~FjmA{T~\\cq@qG",
};

pub const ALL_ROUTES: &[Route] = &[PASILA, OTANIEMI, KALLIO_LOOP];

/// Espoo city centre.
pub const ESPOO: (f64, f64) = (60.2204151, 24.7763345);

/// Helsinki central railway station area.
pub const HELSINKI: (f64, f64) = (60.1657541, 24.9417641);
