//! Eventos: reuniões de comissões, sessões do plenário e afins.

use crate::route::{PathParam, QueryParam, Route};

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/eventos",
        upstream_path: "eventos",
        category: "Eventos",
        description: "Lista de eventos como reuniões de comissões e sessões do plenário.",
        path_params: &[],
        query_params: &[
            QueryParam::text("dataInicio"),
            QueryParam::text("dataFim"),
            QueryParam::int("idOrgao"),
        ],
    },
    Route {
        path: "/eventos/{id}",
        upstream_path: "eventos/{id}",
        category: "Eventos",
        description: "Detalhes de um evento.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/eventos/{id}/deputados",
        upstream_path: "eventos/{id}/deputados",
        category: "Eventos",
        description: "Deputados participantes de um evento.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/eventos/{id}/orgaos",
        upstream_path: "eventos/{id}/orgaos",
        category: "Eventos",
        description: "Órgãos organizadores de um evento.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/eventos/{id}/pauta",
        upstream_path: "eventos/{id}/pauta",
        category: "Eventos",
        description: "Proposições de um evento.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/eventos/{id}/votacoes",
        upstream_path: "eventos/{id}/votacoes",
        category: "Eventos",
        description: "Votações de um evento.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
];
