//! Static catalog of republished endpoints, one module per upstream category.
//!
//! Every entry maps a local path to the identical path under the Camara dos
//! Deputados API base URL. Descriptions come from the upstream API docs.

mod blocos;
mod deputados;
mod eventos;
mod frentes;
mod grupos;
mod legislaturas;
mod orgaos;
mod partidos;
mod proposicoes;
mod referencias;
mod votacoes;

use crate::route::{QueryParam, Route};
use once_cell::sync::Lazy;

/// Page number sent when the caller does not ask for one
pub(crate) const PAGINA: QueryParam = QueryParam::int("pagina").with_default("1");

/// Page size sent when the caller does not ask for one
pub(crate) const ITENS: QueryParam = QueryParam::int("itens").with_default("15");

static CATALOG: Lazy<Vec<&'static Route>> = Lazy::new(|| {
    let groups: [&'static [Route]; 11] = [
        deputados::ROUTES,
        frentes::ROUTES,
        partidos::ROUTES,
        votacoes::ROUTES,
        proposicoes::ROUTES,
        legislaturas::ROUTES,
        orgaos::ROUTES,
        eventos::ROUTES,
        blocos::ROUTES,
        grupos::ROUTES,
        referencias::ROUTES,
    ];
    groups.iter().flat_map(|group| group.iter()).collect()
});

/// Every route in the catalog, in category order
pub(crate) fn all() -> &'static [&'static Route] {
    CATALOG.as_slice()
}
