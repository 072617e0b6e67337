//! Frentes: frentes parlamentares e seus integrantes.

use crate::route::{PathParam, QueryParam, Route};

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/frentes",
        upstream_path: "frentes",
        category: "Frentes",
        description: "Retorna uma lista de frentes parlamentares.",
        path_params: &[],
        query_params: &[QueryParam::int("idLegislatura")],
    },
    Route {
        path: "/frentes/{id}",
        upstream_path: "frentes/{id}",
        category: "Frentes",
        description: "Retorna informações detalhadas sobre uma frente parlamentar.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/frentes/{id}/membros",
        upstream_path: "frentes/{id}/membros",
        category: "Frentes",
        description: "Retorna uma lista de deputados membros de uma frente.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
];
