//! Blocos: blocos partidários. O identificador pode não ser numérico,
//! por isso o parâmetro de caminho é textual.

use crate::route::{PathParam, QueryParam, Route};

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/blocos",
        upstream_path: "blocos",
        category: "Blocos",
        description: "Lista de blocos partidários.",
        path_params: &[],
        query_params: &[QueryParam::int("idLegislatura")],
    },
    Route {
        path: "/blocos/{id}",
        upstream_path: "blocos/{id}",
        category: "Blocos",
        description: "Detalhes de um bloco partidário.",
        path_params: &[PathParam::text("id")],
        query_params: &[],
    },
];
